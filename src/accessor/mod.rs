//! # Key-Path Accessor
//!
//! Read, write and inspect nodes of any [`Traversable`] graph by rich key
//! path. The accessor itself holds only configuration; the graph is borrowed
//! for the length of each call.
//!
//! ```rust
//! use rich_keypath::{KeyPathAccessor, Value};
//!
//! # fn example() -> rich_keypath::Result<()> {
//! let accessor = KeyPathAccessor::new();
//! let mut root = Value::map();
//! accessor.assign(&mut root, "a.b[0]", Value::from(5))?;
//! assert_eq!(accessor.resolve(&root, "a.b[0]")?, &Value::Int(5));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod hydrator;
pub mod resolver;

use crate::config::AccessorConfig;
use crate::path::KeyPath;
use crate::traverse::{self, NodeKind, Traversable};
use crate::Result;

/// Configured entry point for key-path reads and writes.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyPathAccessor {
    config: AccessorConfig,
}

impl KeyPathAccessor {
    /// Accessor with the default `.` / `[n]` syntax and placeholder padding.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AccessorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AccessorConfig {
        &self.config
    }

    /// Parse a path string with this accessor's syntax.
    pub fn parse(&self, path: &str) -> Result<KeyPath> {
        KeyPath::parse_with(path, &self.config.syntax)
    }

    // ========================================================================
    // Read
    // ========================================================================

    /// Return the node at `path`, failing on the first absent segment.
    pub fn resolve<'a, T: Traversable>(&self, root: &'a T, path: &str) -> Result<&'a T> {
        let path = self.parse(path)?;
        resolver::resolve(root, &path)
    }

    pub fn resolve_path<'a, T: Traversable>(&self, root: &'a T, path: &KeyPath) -> Result<&'a T> {
        resolver::resolve(root, path)
    }

    /// Return the node at `path`, or `None` if anything along the way is
    /// missing. A malformed path is still an error.
    pub fn resolve_optional<'a, T: Traversable>(
        &self,
        root: &'a T,
        path: &str,
    ) -> Result<Option<&'a T>> {
        let path = self.parse(path)?;
        resolver::resolve_optional(root, &path)
    }

    pub fn resolve_optional_path<'a, T: Traversable>(
        &self,
        root: &'a T,
        path: &KeyPath,
    ) -> Result<Option<&'a T>> {
        resolver::resolve_optional(root, path)
    }

    // ========================================================================
    // Write
    // ========================================================================

    /// Store `value` at `path`, creating missing intermediate containers.
    ///
    /// The path is parsed before anything is touched, so a malformed path
    /// never leaves a partial write behind.
    pub fn assign<T: Traversable>(&self, root: &mut T, path: &str, value: T) -> Result<()> {
        let path = self.parse(path)?;
        hydrator::assign(root, &path, value, &self.config)
    }

    pub fn assign_path<T: Traversable>(&self, root: &mut T, path: &KeyPath, value: T) -> Result<()> {
        hydrator::assign(root, path, value, &self.config)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn classify<T: Traversable>(&self, node: &T) -> NodeKind {
        traverse::classify(node)
    }

    pub fn is_mutable<T: Traversable>(&self, node: &T) -> bool {
        traverse::is_mutable(node)
    }
}

// ============================================================================
// Extension trait
// ============================================================================

/// Key-path methods on every [`Traversable`] node, using the default accessor.
pub trait KeyPathExt: Traversable {
    fn value_at(&self, path: &str) -> Result<&Self> {
        KeyPathAccessor::new().resolve(self, path)
    }

    fn value_at_optional(&self, path: &str) -> Result<Option<&Self>> {
        KeyPathAccessor::new().resolve_optional(self, path)
    }

    fn assign_at(&mut self, path: &str, value: Self) -> Result<()> {
        KeyPathAccessor::new().assign(self, path, value)
    }

    fn node_kind(&self) -> NodeKind {
        traverse::classify(self)
    }

    fn is_mutable_node(&self) -> bool {
        traverse::is_mutable(self)
    }
}

impl<T: Traversable> KeyPathExt for T {}
