//! File deletion seam.

use std::io;
use std::path::Path;

use async_trait::async_trait;

/// Deletes single files. Fails if the path is missing or not removable.
#[async_trait]
pub trait Filesystem: Send + Sync {
    async fn remove(&self, path: &Path) -> io::Result<()>;
}

/// Deletes files on the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

#[async_trait]
impl Filesystem for LocalFilesystem {
    async fn remove(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_file(path).await
    }
}
