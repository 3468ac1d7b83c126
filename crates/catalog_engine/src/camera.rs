use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use catalog_core::{CameraFacing, ImageHandle};
use catalog_logging::{catalog_debug, catalog_info, catalog_warn};

use crate::CaptureError;

/// Proof that camera access was granted, minted by `FolderCamera` on a granted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraPermit {
    device: String,
}

impl CameraPermit {
    pub(crate) fn new(device: impl Into<String>) -> Self {
        Self {
            device: device.into(),
        }
    }

    pub fn device(&self) -> &str {
        &self.device
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Permission {
    Granted(CameraPermit),
    Denied,
}

#[async_trait::async_trait]
pub trait Camera: Send + Sync {
    async fn request_permission(&self) -> Permission;

    async fn capture(
        &self,
        permit: &CameraPermit,
        facing: CameraFacing,
    ) -> Result<ImageHandle, CaptureError>;
}

/// Camera backed by a camera-roll directory.
///
/// Each capture hands out the next `.jpg`/`.jpeg` file (by name) that has not
/// been captured before. A `front/` or `back/` subdirectory is used for the
/// matching facing when it exists.
#[derive(Debug)]
pub struct FolderCamera {
    roll: PathBuf,
    taken: Mutex<HashSet<PathBuf>>,
}

impl FolderCamera {
    pub fn new(roll: PathBuf) -> Self {
        Self {
            roll,
            taken: Mutex::new(HashSet::new()),
        }
    }

    fn facing_dir(&self, facing: CameraFacing) -> PathBuf {
        let sub = match facing {
            CameraFacing::Back => "back",
            CameraFacing::Front => "front",
        };
        let candidate = self.roll.join(sub);
        if candidate.is_dir() {
            candidate
        } else {
            self.roll.clone()
        }
    }

    fn claim_next(&self, mut images: Vec<PathBuf>) -> Option<PathBuf> {
        images.sort();
        let mut taken = match self.taken.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let next = images.into_iter().find(|path| !taken.contains(path))?;
        taken.insert(next.clone());
        Some(next)
    }
}

#[async_trait::async_trait]
impl Camera for FolderCamera {
    async fn request_permission(&self) -> Permission {
        match tokio::fs::metadata(&self.roll).await {
            Ok(meta) if meta.is_dir() => {
                catalog_info!("Camera roll {:?} available", self.roll);
                Permission::Granted(CameraPermit::new(self.roll.display().to_string()))
            }
            Ok(_) => {
                catalog_warn!("Camera roll {:?} is not a directory", self.roll);
                Permission::Denied
            }
            Err(err) => {
                catalog_warn!("Camera roll {:?} unavailable: {}", self.roll, err);
                Permission::Denied
            }
        }
    }

    async fn capture(
        &self,
        permit: &CameraPermit,
        facing: CameraFacing,
    ) -> Result<ImageHandle, CaptureError> {
        let dir = self.facing_dir(facing);
        catalog_debug!(
            "Capturing from {:?} on device {} ({:?})",
            dir,
            permit.device(),
            facing
        );
        let images = list_images(&dir).await?;
        let next = self
            .claim_next(images)
            .ok_or_else(|| CaptureError::NoImageAvailable(dir.clone()))?;
        Ok(ImageHandle::new(next))
    }
}

async fn list_images(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut reader = tokio::fs::read_dir(dir).await?;
    let mut images = Vec::new();
    while let Some(entry) = reader.next_entry().await? {
        let path = entry.path();
        if entry.file_type().await?.is_file() && is_jpeg(&path) {
            images.push(path);
        }
    }
    Ok(images)
}

fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg"))
}

#[cfg(test)]
mod tests {
    use super::is_jpeg;
    use std::path::Path;

    #[test]
    fn jpeg_extensions_are_case_insensitive() {
        assert!(is_jpeg(Path::new("a/IMG_1.JPG")));
        assert!(is_jpeg(Path::new("b.jpeg")));
        assert!(!is_jpeg(Path::new("c.png")));
        assert!(!is_jpeg(Path::new("jpg")));
    }
}
