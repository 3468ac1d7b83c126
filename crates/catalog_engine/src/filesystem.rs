use std::io;
use std::path::Path;

use catalog_core::ImageHandle;

#[async_trait::async_trait]
pub trait FileSystem: Send + Sync {
    /// Creates `path` and any missing parents. An existing directory is fine.
    async fn make_directory(&self, path: &Path) -> io::Result<()>;

    /// Copies the image behind `source` to `destination`, returning bytes written.
    async fn copy(&self, source: &ImageHandle, destination: &Path) -> io::Result<u64>;
}

/// `FileSystem` over the local disk via `tokio::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

#[async_trait::async_trait]
impl FileSystem for LocalFileSystem {
    async fn make_directory(&self, path: &Path) -> io::Result<()> {
        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.is_dir() => return Ok(()),
            Ok(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "path exists and is not a directory",
                ))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(err),
        }
        tokio::fs::create_dir_all(path).await
    }

    async fn copy(&self, source: &ImageHandle, destination: &Path) -> io::Result<u64> {
        tokio::fs::copy(source.location(), destination).await
    }
}
