//! Connect-once guard for lazily established shared resources.
//!
//! The cache handle is created unconnected at startup and connected on first
//! use. Concurrent requests may race to trigger that first connect; the guard
//! serializes them so at most one successful transport connection exists per
//! process lifetime.

use std::future::Future;

use tokio::sync::OnceCell;

/// A shared resource that is established at most once.
///
/// A failed connect leaves the cell empty, so a later caller retries rather
/// than observing a poisoned handle.
#[derive(Debug, Default)]
pub struct ConnectOnce<T> {
    cell: OnceCell<T>,
}

impl<T: Clone> ConnectOnce<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Returns the resource, running `connect` only if nothing is stored yet.
    ///
    /// Concurrent callers block on the in-flight connect instead of starting
    /// their own; all of them observe the same established resource.
    pub async fn get_or_connect<E, F, Fut>(&self, connect: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.cell.get_or_try_init(connect).await.cloned()
    }

    /// Whether a resource has been successfully established.
    pub fn is_open(&self) -> bool {
        self.cell.initialized()
    }
}
