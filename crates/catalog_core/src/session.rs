use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::name::{find_duplicate_name, validate_file_name};
use crate::ValidationError;

/// Opaque reference to image data produced by the camera.
///
/// Cloning is cheap; the session never opens the image.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(Arc<Path>);

impl ImageHandle {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        let location: PathBuf = location.into();
        Self(Arc::from(location))
    }

    pub fn location(&self) -> &Path {
        &self.0
    }
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ImageHandle({})", self.0.display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoEntry {
    pub handle: ImageHandle,
    pub display_name: String,
}

/// Everything a save needs, detached from the live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub item_name: String,
    pub destination: PathBuf,
    pub entries: Vec<PhotoEntry>,
}

/// Photos captured for a single item, in capture order.
///
/// After every append or delete each entry is named `{item_name}_{index + 1}`.
/// Only `rename` may break that pattern, and a later delete restores it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoSession {
    item_name: String,
    entries: Vec<PhotoEntry>,
}

impl PhotoSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Existing entries keep their names.
    pub fn set_item_name(&mut self, name: &str) {
        self.item_name = name.trim().to_string();
    }

    pub fn entries(&self) -> &[PhotoEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn append(&mut self, handle: ImageHandle) -> Result<&PhotoEntry, ValidationError> {
        self.check_item_name()?;
        let display_name = sequential_name(&self.item_name, self.entries.len());
        self.entries.push(PhotoEntry {
            handle,
            display_name,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Replaces the display name with `new_name` exactly as typed.
    ///
    /// Two photos may not share a name (ignoring case): both would be saved to the
    /// same file.
    pub fn rename(&mut self, index: usize, new_name: &str) -> Result<(), ValidationError> {
        self.check_index(index)?;
        if new_name.trim().is_empty() {
            return Err(ValidationError::EmptyPhotoName);
        }
        validate_file_name(new_name)?;
        let lowered = new_name.to_lowercase();
        let taken = self
            .entries
            .iter()
            .enumerate()
            .any(|(other, entry)| other != index && entry.display_name.to_lowercase() == lowered);
        if taken {
            return Err(ValidationError::DuplicatePhotoName {
                name: new_name.to_string(),
            });
        }
        self.entries[index].display_name = new_name.to_string();
        Ok(())
    }

    /// Removes the entry and renumbers every remaining one, dropping custom names.
    pub fn delete(&mut self, index: usize) -> Result<PhotoEntry, ValidationError> {
        self.check_index(index)?;
        let removed = self.entries.remove(index);
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.display_name = sequential_name(&self.item_name, index);
        }
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn snapshot(&self, destination: &Path) -> Result<SaveRequest, ValidationError> {
        if self.entries.is_empty() {
            return Err(ValidationError::NoPhotos);
        }
        self.check_item_name()?;
        let names = self.entries.iter().map(|entry| entry.display_name.as_str());
        if let Some(name) = find_duplicate_name(names) {
            return Err(ValidationError::DuplicatePhotoName {
                name: name.to_string(),
            });
        }
        Ok(SaveRequest {
            item_name: self.item_name.clone(),
            destination: destination.to_path_buf(),
            entries: self.entries.clone(),
        })
    }

    fn check_item_name(&self) -> Result<(), ValidationError> {
        if self.item_name.is_empty() {
            return Err(ValidationError::EmptyItemName);
        }
        validate_file_name(&self.item_name)
    }

    fn check_index(&self, index: usize) -> Result<(), ValidationError> {
        if index >= self.entries.len() {
            return Err(ValidationError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }
}

fn sequential_name(item_name: &str, index: usize) -> String {
    format!("{item_name}_{}", index + 1)
}
