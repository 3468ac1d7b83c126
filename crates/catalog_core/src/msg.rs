use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the item name field.
    ItemNameChanged(String),
    /// Camera permission request finished.
    PermissionResolved { granted: bool },
    /// User asked for the camera screen.
    OpenCameraClicked,
    /// User closed the camera screen; discards the session.
    CloseCameraClicked,
    /// User toggled between front and back camera.
    FlipCameraClicked,
    /// User pressed the shutter.
    TakePictureClicked,
    /// Camera delivered an image.
    PhotoCaptured { handle: crate::ImageHandle },
    /// Camera failed to deliver an image.
    CaptureFailed { message: String },
    /// User edited the name of the photo at `index`.
    PhotoRenamed { index: usize, name: String },
    /// User deleted the photo at `index`.
    DeletePhotoClicked { index: usize },
    /// User asked to choose a destination folder.
    PickDestinationClicked,
    /// Picker returned a folder.
    DestinationPicked(PathBuf),
    /// Picker was dismissed.
    DestinationPickCancelled,
    /// Picker could not be shown or read.
    DestinationPickFailed { message: String },
    /// User asked to keep the current destination as the default.
    MakeDestinationDefaultClicked,
    /// User clicked Save.
    SaveClicked,
    /// Engine saved every photo.
    SaveSucceeded { paths: Vec<PathBuf> },
    /// Engine reported a failed save.
    SaveFailed { message: String },
    /// Fallback for placeholder wiring.
    NoOp,
}
