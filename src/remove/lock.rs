//! Mutual exclusion for fragment mutations.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

/// Guard held while fragment files are being mutated.
pub type FragmentGuard<'a> = MutexGuard<'a, ()>;

/// Process-wide lock over the templates directory.
///
/// Cloning shares the same lock. Every component that creates or deletes
/// fragments must hold it for the duration of its file mutations. An async
/// mutex is used because registry calls are awaited while it is held.
#[derive(Debug, Clone, Default)]
pub struct FragmentLock {
    inner: Arc<Mutex<()>>,
}

impl FragmentLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access. Released when the guard is dropped.
    pub async fn acquire(&self) -> FragmentGuard<'_> {
        self.inner.lock().await
    }
}
