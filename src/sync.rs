//! Shared graph handle.
//!
//! The accessor has no locking of its own. `SharedGraph` puts a root behind
//! an `RwLock` so several threads can read while writes are serialized.
//!
//! ## Limitations
//!
//! - Reads return clones: a reference into the graph cannot outlive the
//!   read guard.
//! - Each call takes the lock once. A read followed by a write from the same
//!   caller is not atomic; use [`SharedGraph::write`] for read-modify-write.

use std::sync::Arc;
use parking_lot::RwLock;

use crate::accessor::KeyPathAccessor;
use crate::traverse::{NodeKind, Traversable};
use crate::Result;

/// A root node shared between threads.
pub struct SharedGraph<T> {
    inner: Arc<RwLock<T>>,
    accessor: KeyPathAccessor,
}

impl<T> Clone for SharedGraph<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            accessor: self.accessor,
        }
    }
}

impl<T: Traversable> SharedGraph<T> {
    pub fn new(root: T) -> Self {
        Self::with_accessor(root, KeyPathAccessor::new())
    }

    pub fn with_accessor(root: T, accessor: KeyPathAccessor) -> Self {
        Self {
            inner: Arc::new(RwLock::new(root)),
            accessor,
        }
    }

    pub fn accessor(&self) -> &KeyPathAccessor {
        &self.accessor
    }

    /// Run `f` against the root under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.read())
    }

    /// Run `f` against the root under the write lock.
    pub fn write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.inner.write())
    }

    pub fn assign(&self, path: &str, value: T) -> Result<()> {
        let mut root = self.inner.write();
        self.accessor.assign(&mut *root, path, value)
    }

    pub fn classify_at(&self, path: &str) -> Result<NodeKind> {
        let root = self.inner.read();
        self.accessor.resolve(&*root, path).map(|node| node.kind())
    }
}

impl<T: Traversable + Clone> SharedGraph<T> {
    pub fn resolve_cloned(&self, path: &str) -> Result<T> {
        let root = self.inner.read();
        self.accessor.resolve(&*root, path).cloned()
    }

    pub fn resolve_optional_cloned(&self, path: &str) -> Result<Option<T>> {
        let root = self.inner.read();
        Ok(self.accessor.resolve_optional(&*root, path)?.cloned())
    }

    /// Clone of the whole graph.
    pub fn snapshot(&self) -> T {
        self.inner.read().clone()
    }
}
