//! Type classification and mutability checks.
//!
//! Nothing here is cached. A node's answer can change the moment it is
//! mutated, so callers that need certainty at write time ask again.

use super::{NodeKind, Traversable};

/// Classify a node into one of the four structural kinds.
pub fn classify<T: Traversable>(node: &T) -> NodeKind {
    node.kind()
}

/// Whether a node accepts structural writes through a key path.
///
/// Arrays must be growable; Dictionaries and Unknown objects must accept a
/// value under an arbitrary key. Primitives never do.
pub fn is_mutable<T: Traversable>(node: &T) -> bool {
    is_mutable_given_kind(node, node.kind())
}

/// Same as [`is_mutable`] for a caller that already classified `node`.
///
/// `kind` must be the node's current classification.
pub fn is_mutable_given_kind<T: Traversable>(node: &T, kind: NodeKind) -> bool {
    match kind {
        NodeKind::Array => node.is_index_insertable(),
        NodeKind::Dictionary | NodeKind::Unknown => node.is_keyed_settable(),
        NodeKind::Primitive => false,
    }
}
