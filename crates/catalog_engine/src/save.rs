use std::path::PathBuf;
use std::sync::Arc;

use catalog_core::{find_duplicate_name, validate_file_name, SaveRequest, ValidationError};
use catalog_logging::{catalog_debug, catalog_info, catalog_warn};
use futures_util::future::join_all;

use crate::{CopyFailure, FileSystem, SaveError, StorageError};

pub const IMAGE_EXTENSION: &str = "jpg";

/// Folder the photos of `request` land in: `{destination}/{item_name}`.
pub fn target_folder(request: &SaveRequest) -> PathBuf {
    request.destination.join(&request.item_name)
}

/// Copies a session's photos into an item-named folder.
///
/// All copies are started together and every result is awaited; a failing copy
/// does not stop the others. Files already copied are left in place when the
/// save as a whole fails.
pub struct SaveCoordinator {
    fs: Arc<dyn FileSystem>,
}

impl SaveCoordinator {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    pub async fn save(&self, request: &SaveRequest) -> Result<Vec<PathBuf>, SaveError> {
        validate(request)?;

        let folder = target_folder(request);
        catalog_info!(
            "Saving {} photo(s) to {:?}",
            request.entries.len(),
            folder
        );
        self.fs
            .make_directory(&folder)
            .await
            .map_err(|source| StorageError::CreateFolder {
                path: folder.clone(),
                source,
            })?;

        let targets: Vec<PathBuf> = request
            .entries
            .iter()
            .map(|entry| folder.join(format!("{}.{IMAGE_EXTENSION}", entry.display_name)))
            .collect();
        let copies = request
            .entries
            .iter()
            .zip(&targets)
            .map(|(entry, target)| self.fs.copy(&entry.handle, target));
        let results = join_all(copies).await;

        let mut failures = Vec::new();
        for (index, ((entry, target), result)) in request
            .entries
            .iter()
            .zip(&targets)
            .zip(results)
            .enumerate()
        {
            match result {
                Ok(bytes) => {
                    catalog_debug!("Copied {:?} -> {:?} ({} bytes)", entry.handle, target, bytes)
                }
                Err(source) => {
                    catalog_warn!("Copy {:?} -> {:?} failed: {}", entry.handle, target, source);
                    failures.push(CopyFailure {
                        position: index + 1,
                        display_name: entry.display_name.clone(),
                        target: target.clone(),
                        source,
                    });
                }
            }
        }

        if !failures.is_empty() {
            return Err(StorageError::CopyFailed { failures }.into());
        }
        Ok(targets)
    }
}

fn validate(request: &SaveRequest) -> Result<(), ValidationError> {
    if request.entries.is_empty() {
        return Err(ValidationError::NoPhotos);
    }
    if request.item_name.trim().is_empty() {
        return Err(ValidationError::EmptyItemName);
    }
    validate_file_name(&request.item_name)?;
    for entry in &request.entries {
        if entry.display_name.trim().is_empty() {
            return Err(ValidationError::EmptyPhotoName);
        }
        validate_file_name(&entry.display_name)?;
    }
    let names = request.entries.iter().map(|entry| entry.display_name.as_str());
    if let Some(name) = find_duplicate_name(names) {
        return Err(ValidationError::DuplicatePhotoName {
            name: name.to_string(),
        });
    }
    Ok(())
}
