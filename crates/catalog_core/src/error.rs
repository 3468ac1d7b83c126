use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("item name is empty")]
    EmptyItemName,
    #[error("photo name is empty")]
    EmptyPhotoName,
    #[error("name {name:?} contains {found:?}, which is not allowed in file names")]
    ForbiddenCharacter { name: String, found: char },
    #[error("name {name:?} is reserved by the file system")]
    ReservedName { name: String },
    #[error("no photo at index {index} (session has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("another photo is already named {name:?}")]
    DuplicatePhotoName { name: String },
    #[error("no photos to save")]
    NoPhotos,
}
