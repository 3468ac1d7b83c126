use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use catalog_logging::{catalog_info, catalog_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use super::logging::LogDestination;

pub(crate) const SETTINGS_FILENAME: &str = "catalog_settings.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Settings {
    /// Folder item folders are created under unless the user picks another.
    pub default_destination: PathBuf,
    /// Directory the folder camera takes pictures from.
    pub camera_roll: PathBuf,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
    /// Log at debug level instead of info.
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_destination: PathBuf::from("catalog"),
            camera_roll: PathBuf::from("camera_roll"),
            log_destination: LogDestination::File,
            log_file: PathBuf::from("catalog.log"),
            verbose: false,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    #[error("could not serialize settings: {0}")]
    Serialize(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Reads settings from `dir`, falling back to defaults when missing or unreadable.
pub(crate) fn load_settings(dir: &Path) -> Settings {
    let path = dir.join(SETTINGS_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Settings::default();
        }
        Err(err) => {
            catalog_warn!("Failed to read settings from {:?}: {}", path, err);
            return Settings::default();
        }
    };

    match ron::from_str(&content) {
        Ok(settings) => {
            catalog_info!("Loaded settings from {:?}", path);
            settings
        }
        Err(err) => {
            catalog_warn!("Failed to parse settings from {:?}: {}", path, err);
            Settings::default()
        }
    }
}

/// Writes settings to `dir` through a temp file so a crash never leaves half a file.
pub(crate) fn save_settings(dir: &Path, settings: &Settings) -> Result<PathBuf, SettingsError> {
    let pretty = ron::ser::PrettyConfig::new();
    let content = ron::ser::to_string_pretty(settings, pretty)
        .map_err(|err| SettingsError::Serialize(err.to_string()))?;

    fs::create_dir_all(dir)?;
    let target = dir.join(SETTINGS_FILENAME);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(&target).map_err(|err| SettingsError::Io(err.error))?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(SETTINGS_FILENAME), "(not ron").unwrap();
        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(SETTINGS_FILENAME),
            "(default_destination: \"/srv/inventory\")",
        )
        .unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.default_destination, PathBuf::from("/srv/inventory"));
        assert_eq!(settings.camera_roll, Settings::default().camera_roll);
        assert!(!settings.verbose);
    }

    #[test]
    fn saved_settings_load_back_and_replace_previous() {
        let temp = TempDir::new().unwrap();
        let mut settings = Settings {
            log_destination: LogDestination::Both,
            ..Settings::default()
        };
        save_settings(temp.path(), &settings).unwrap();

        settings.default_destination = PathBuf::from("/mnt/share");
        let path = save_settings(temp.path(), &settings).unwrap();

        assert_eq!(path, temp.path().join(SETTINGS_FILENAME));
        assert_eq!(load_settings(temp.path()), settings);
    }
}
