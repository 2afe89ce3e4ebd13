//! # rich-keypath — Rich Key-Path Access
//!
//! Read and write nested values in graphs of maps, sequences and records
//! with a single path string such as `"users[0].address.city"`.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `Traversable` is the contract between the accessor and the object model
//! 2. **Parser owns nothing**: path string → `KeyPath` is a pure function
//! 3. **Hydrating writes**: `assign` creates missing maps and lists on the way down
//! 4. **No cached state**: mutability is checked at the moment of every write
//!
//! ## Quick Start
//!
//! ```rust
//! use rich_keypath::{assign, resolve, Value};
//!
//! # fn example() -> rich_keypath::Result<()> {
//! let mut root = Value::map();
//! assign(&mut root, "users[0].address.city", Value::from("Lisbon"))?;
//!
//! let city = resolve(&root, "users[0].address.city")?;
//! assert_eq!(city, &Value::from("Lisbon"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Object Models
//!
//! | Type | Array | Dictionary | Unknown |
//! |------|-------|------------|---------|
//! | [`Value`] | `List`, `Tuple` (read-only) | `Map` | `Record` |
//! | `serde_json::Value` | `Array` | `Object` | — |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod path;
pub mod traverse;
pub mod accessor;
pub mod config;
pub mod sync;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Value, PropertyMap, Record};
pub use path::{KeyPath, Segment, PathSyntax};
pub use traverse::{NodeKind, Traversable};
pub use accessor::{KeyPathAccessor, KeyPathExt};
pub use config::{AccessorConfig, PadPolicy};
pub use sync::SharedGraph;

// ============================================================================
// Default-accessor shortcuts
// ============================================================================

/// Read the node at `path`. See [`KeyPathAccessor::resolve`].
pub fn resolve<'a, T: Traversable>(root: &'a T, path: &str) -> Result<&'a T> {
    KeyPathAccessor::new().resolve(root, path)
}

/// Read the node at `path`, or `None` if absent. See [`KeyPathAccessor::resolve_optional`].
pub fn resolve_optional<'a, T: Traversable>(root: &'a T, path: &str) -> Result<Option<&'a T>> {
    KeyPathAccessor::new().resolve_optional(root, path)
}

/// Write `value` at `path`, hydrating containers. See [`KeyPathAccessor::assign`].
pub fn assign<T: Traversable>(root: &mut T, path: &str, value: T) -> Result<()> {
    KeyPathAccessor::new().assign(root, path, value)
}

/// Structural kind of `node`. See [`traverse::classify`].
pub fn classify<T: Traversable>(node: &T) -> NodeKind {
    traverse::classify(node)
}

/// Whether `node` accepts structural writes. See [`traverse::is_mutable`].
pub fn is_mutable<T: Traversable>(node: &T) -> bool {
    traverse::is_mutable(node)
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed key path at position {position}: {message}")]
    MalformedPath { position: usize, message: String },

    #[error("Missing key '{key}' at '{path}'")]
    MissingKey { key: String, path: String },

    #[error("Index {index} out of range for length {len} at '{path}'")]
    IndexOutOfRange { index: usize, len: usize, path: String },

    #[error("Type error at '{path}': expected {expected}, got {found}")]
    TypeMismatch { path: String, expected: NodeKind, found: NodeKind },

    #[error("Cannot write '{path}': {kind} container refuses mutation")]
    ImmutableTarget { path: String, kind: NodeKind },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Read-time absence: the path was well-formed but led nowhere.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::MissingKey { .. } | Error::IndexOutOfRange { .. } | Error::TypeMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
