//! # Value Model
//!
//! The crate's own node type for key-path traversal: maps, growable lists,
//! fixed tuples, opaque records and scalar leaves.
//!
//! Design rule: this module is pure data — no path logic, no I/O, no state.
//! `Traversable` for `Value` lives in `traverse`.

pub mod value;
pub mod property_map;
pub mod record;

pub use value::Value;
pub use property_map::PropertyMap;
pub use record::Record;
