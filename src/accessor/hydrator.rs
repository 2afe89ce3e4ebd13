//! Write side: walk a parsed path, creating containers as needed, and store
//! the value at the last segment.
//!
//! Writes are not transactional. Containers created before a failing
//! segment stay in the graph.

use tracing::{debug, trace};

use crate::config::{AccessorConfig, PadPolicy};
use crate::path::{KeyPath, Segment};
use crate::traverse::{is_mutable, NodeKind, Traversable};
use crate::{Error, Result};

/// Store `value` at `path` below `root`, hydrating missing containers.
///
/// An intermediate child is replaced when it is absent, a placeholder, or a
/// container of the wrong kind for the next segment. An immutable container
/// of the right kind is kept when the write only passes through it to a
/// mutable descendant; otherwise it is replaced by a mutable copy (or an
/// empty container when the node model offers no copy). Primitives are
/// never replaced, and nothing is replaced under an immutable parent.
pub fn assign<T: Traversable>(
    root: &mut T,
    path: &KeyPath,
    value: T,
    config: &AccessorConfig,
) -> Result<()> {
    let segments = path.segments();
    let last = segments.len() - 1;

    let mut node = root;
    for (depth, segment) in segments[..last].iter().enumerate() {
        if let Some(container) = replacement(node, segment, &segments[depth + 1..]) {
            store(node, segment, container, path, depth, config)?;
            trace!(path = %path.prefix(depth + 1), "hydrated container");
        }

        let kind = node.kind();
        node = child_mut(node, segment).ok_or_else(|| Error::ImmutableTarget {
            path: path.prefix(depth + 1),
            kind,
        })?;
    }

    store(node, &segments[last], value, path, last, config)
}

fn child<'a, T: Traversable>(node: &'a T, segment: &Segment) -> Option<&'a T> {
    match segment {
        Segment::Key(key) => node.get_key(key),
        Segment::Index(index) => node.get_index(*index),
    }
}

fn child_mut<'a, T: Traversable>(node: &'a mut T, segment: &Segment) -> Option<&'a mut T> {
    match segment {
        Segment::Key(key) => node.get_key_mut(key),
        Segment::Index(index) => node.get_index_mut(*index),
    }
}

/// Whether `next` can address into `node` at all.
fn fits<T: Traversable>(node: &T, next: &Segment) -> bool {
    match next {
        Segment::Key(_) => node.kind().is_keyed(),
        Segment::Index(_) => node.kind() == NodeKind::Array,
    }
}

/// The container to store under `segment` before descending, if the current
/// child cannot carry the rest of the path. `rest` starts with the segment
/// that addresses into that child.
fn replacement<T: Traversable>(node: &T, segment: &Segment, rest: &[Segment]) -> Option<T> {
    let next = &rest[0];
    let fresh = || if next.is_index() { T::empty_array() } else { T::empty_dictionary() };

    let Some(existing) = child(node, segment) else {
        return Some(fresh());
    };
    if existing.is_placeholder() {
        return Some(fresh());
    }
    if existing.kind() == NodeKind::Primitive {
        return None;
    }
    if !fits(existing, next) {
        debug!(kind = %existing.kind(), "replacing container of the wrong kind");
        return Some(fresh());
    }
    if is_mutable(existing) || !writes_into(existing, rest) {
        return None;
    }

    debug!(kind = %existing.kind(), "replacing immutable container");
    Some(
        existing
            .mutable_copy()
            .filter(|copy| fits(copy, next) && is_mutable(copy))
            .unwrap_or_else(fresh),
    )
}

/// Whether writing `segments` below `node` stores into `node` itself, either
/// at the final segment or by hydrating one of its children. Walks through
/// immutable containers only; a mutable or primitive child ends the search.
fn writes_into<T: Traversable>(node: &T, segments: &[Segment]) -> bool {
    let mut node = node;
    for (i, segment) in segments.iter().enumerate() {
        let Some(next) = segments.get(i + 1) else {
            return true;
        };
        match child(node, segment) {
            None => return true,
            Some(c) if c.is_placeholder() => return true,
            Some(c) if c.kind() == NodeKind::Primitive || is_mutable(c) => return false,
            Some(c) if !fits(c, next) => return true,
            Some(c) => node = c,
        }
    }
    true
}

/// Write one segment into `node`, checking its capability first.
fn store<T: Traversable>(
    node: &mut T,
    segment: &Segment,
    value: T,
    path: &KeyPath,
    depth: usize,
    config: &AccessorConfig,
) -> Result<()> {
    let kind = node.kind();
    let refused = || {
        debug!(path = %path.prefix(depth + 1), %kind, "write refused");
        Error::ImmutableTarget { path: path.prefix(depth + 1), kind }
    };

    match segment {
        Segment::Key(key) => {
            if !kind.is_keyed() || !node.is_keyed_settable() {
                return Err(refused());
            }
            node.try_set_key(key, value).map_err(|_| refused())
        }
        Segment::Index(index) => {
            let index = *index;
            if kind != NodeKind::Array || !node.is_index_insertable() {
                return Err(refused());
            }
            let len = node.len().unwrap_or(0);
            if index < len {
                return node.try_set_index(index, value).map_err(|_| refused());
            }
            if index > len {
                let gap = index - len;
                let out_of_range = || Error::IndexOutOfRange {
                    index,
                    len,
                    path: path.prefix(depth + 1),
                };
                match config.pad_policy {
                    PadPolicy::StrictAppend => return Err(out_of_range()),
                    PadPolicy::PadWithPlaceholder if gap > config.max_pad => {
                        debug!(path = %path.prefix(depth + 1), gap, max_pad = config.max_pad, "padding limit exceeded");
                        return Err(out_of_range());
                    }
                    PadPolicy::PadWithPlaceholder => {
                        for _ in 0..gap {
                            node.try_push(T::placeholder()).map_err(|_| refused())?;
                        }
                        trace!(path = %path.prefix(depth + 1), padded = gap, "padded sequence");
                    }
                }
            }
            node.try_push(value).map_err(|_| refused())
        }
    }
}
