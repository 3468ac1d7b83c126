//! Catalog engine: camera, file-system and picker collaborators plus save execution.
mod camera;
mod engine;
mod filesystem;
mod picker;
mod save;
mod types;

pub use camera::{Camera, CameraPermit, FolderCamera, Permission};
pub use engine::EngineHandle;
pub use filesystem::{FileSystem, LocalFileSystem};
pub use picker::{DestinationPicker, PickOutcome};
pub use save::{target_folder, SaveCoordinator, IMAGE_EXTENSION};
pub use types::{CaptureError, CopyFailure, EngineEvent, SaveError, StorageError};
