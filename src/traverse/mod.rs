//! # Traversal Contract
//!
//! `Traversable` is the contract between the key-path accessor and whatever
//! object model holds the data. The accessor only ever sees a node through
//! these methods, so any tree of maps, sequences and leaves can be walked
//! once it implements them.
//!
//! Implementations ship for the crate's own [`Value`](crate::Value) and for
//! [`serde_json::Value`].

pub mod classify;
mod json;
mod value;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use classify::{classify, is_mutable, is_mutable_given_kind};

// ============================================================================
// NodeKind
// ============================================================================

/// Structural classification of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Ordered, index-addressable sequence.
    Array,
    /// Keyed associative container.
    Dictionary,
    /// Leaf with no substructure.
    Primitive,
    /// Opaque object exposing named properties.
    Unknown,
}

impl NodeKind {
    /// Whether key segments can address into this kind.
    pub fn is_keyed(self) -> bool {
        matches!(self, NodeKind::Dictionary | NodeKind::Unknown)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Array => "Array",
            NodeKind::Dictionary => "Dictionary",
            NodeKind::Primitive => "Primitive",
            NodeKind::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Traversable
// ============================================================================

/// Host object model as seen by the key-path accessor.
///
/// Getters return `None` when the node does not support that kind of access
/// or the key/index is absent. Setters return the rejected value on refusal
/// so the caller keeps ownership.
pub trait Traversable: Sized {
    /// Classify this node. Must be total and stable while the node is unmodified.
    fn kind(&self) -> NodeKind;

    // --- Keyed access (Dictionary / Unknown) ---

    fn get_key(&self, key: &str) -> Option<&Self>;

    fn get_key_mut(&mut self, key: &str) -> Option<&mut Self>;

    /// Whether `try_set_key` can store a value under an arbitrary key.
    fn is_keyed_settable(&self) -> bool;

    /// Store `value` under `key`, creating or replacing the entry.
    fn try_set_key(&mut self, key: &str, value: Self) -> Result<(), Self>;

    // --- Indexed access (Array) ---

    /// Element count, or `None` if this node is not a sequence.
    fn len(&self) -> Option<usize>;

    fn get_index(&self, index: usize) -> Option<&Self>;

    fn get_index_mut(&mut self, index: usize) -> Option<&mut Self>;

    /// Whether the sequence can grow.
    fn is_index_insertable(&self) -> bool;

    /// Replace the element at `index`. `index` must be in bounds.
    fn try_set_index(&mut self, index: usize, value: Self) -> Result<(), Self>;

    /// Append `value` at the end of the sequence.
    fn try_push(&mut self, value: Self) -> Result<(), Self>;

    // --- Constructors used by hydration ---

    fn empty_dictionary() -> Self;

    fn empty_array() -> Self;

    /// Filler stored when padding a sequence out to a target index.
    fn placeholder() -> Self;

    /// Whether this node is a filler slot that hydration may overwrite.
    fn is_placeholder(&self) -> bool;

    /// A mutable node with the same kind and contents, used when hydration
    /// has to replace an immutable container. `None` means the container is
    /// replaced by an empty one instead.
    fn mutable_copy(&self) -> Option<Self> {
        None
    }
}
