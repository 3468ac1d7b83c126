use std::fmt;
use std::io;
use std::path::PathBuf;

use catalog_core::{ImageHandle, ValidationError};
use thiserror::Error;

#[derive(Debug)]
pub enum EngineEvent {
    PermissionResolved {
        granted: bool,
    },
    CaptureCompleted {
        result: Result<ImageHandle, CaptureError>,
    },
    SaveCompleted {
        result: Result<Vec<PathBuf>, SaveError>,
    },
}

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("camera permission was not granted")]
    PermissionDenied,
    #[error("no new image available in {0:?}")]
    NoImageAvailable(PathBuf),
    #[error("camera io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug)]
pub struct CopyFailure {
    /// 1-based position of the entry in the session.
    pub position: usize,
    pub display_name: String,
    pub target: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for CopyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "photo {} ({}) to {}: {}",
            self.position,
            self.display_name,
            self.target.display(),
            self.source
        )
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not create folder {}: {source}", .path.display())]
    CreateFolder { path: PathBuf, source: io::Error },
    #[error("could not copy {}", describe_failures(.failures))]
    CopyFailed { failures: Vec<CopyFailure> },
}

impl StorageError {
    /// Positions (1-based) of the entries that were not saved.
    pub fn failed_positions(&self) -> Vec<usize> {
        match self {
            StorageError::CreateFolder { .. } => Vec::new(),
            StorageError::CopyFailed { failures } => {
                failures.iter().map(|failure| failure.position).collect()
            }
        }
    }
}

fn describe_failures(failures: &[CopyFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("save failed: {0}")]
    Storage(#[from] StorageError),
}
