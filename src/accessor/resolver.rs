//! Read side: walk a parsed path without touching the graph.

use crate::path::{KeyPath, Segment};
use crate::traverse::{NodeKind, Traversable};
use crate::{Error, Result};

/// Follow every segment of `path` from `root` and return the node reached.
pub fn resolve<'a, T: Traversable>(root: &'a T, path: &KeyPath) -> Result<&'a T> {
    let mut node = root;
    for (depth, segment) in path.segments().iter().enumerate() {
        node = step(node, segment, path, depth)?;
    }
    Ok(node)
}

/// Like [`resolve`], but any absence along the way yields `Ok(None)`.
pub fn resolve_optional<'a, T: Traversable>(root: &'a T, path: &KeyPath) -> Result<Option<&'a T>> {
    match resolve(root, path) {
        Ok(node) => Ok(Some(node)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

fn step<'a, T: Traversable>(
    node: &'a T,
    segment: &Segment,
    path: &KeyPath,
    depth: usize,
) -> Result<&'a T> {
    let kind = node.kind();
    match segment {
        Segment::Key(key) => {
            if !kind.is_keyed() {
                return Err(Error::TypeMismatch {
                    path: path.prefix(depth + 1),
                    expected: NodeKind::Dictionary,
                    found: kind,
                });
            }
            node.get_key(key).ok_or_else(|| Error::MissingKey {
                key: key.clone(),
                path: path.prefix(depth + 1),
            })
        }
        Segment::Index(index) => {
            let len = match (kind, node.len()) {
                (NodeKind::Array, Some(len)) => len,
                _ => {
                    return Err(Error::TypeMismatch {
                        path: path.prefix(depth + 1),
                        expected: NodeKind::Array,
                        found: kind,
                    });
                }
            };
            node.get_index(*index).ok_or_else(|| Error::IndexOutOfRange {
                index: *index,
                len,
                path: path.prefix(depth + 1),
            })
        }
    }
}
