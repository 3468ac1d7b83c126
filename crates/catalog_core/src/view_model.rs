use std::path::PathBuf;

use crate::{CameraAccess, CameraFacing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Main,
    Camera,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line (or few-line) feedback shown after a user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub screen: Screen,
    pub camera: CameraAccess,
    pub facing: CameraFacing,
    pub item_name: String,
    pub destination: PathBuf,
    pub entries: Vec<EntryRowView>,
    pub busy: bool,
    pub status: Option<StatusMessage>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRowView {
    /// 1-based, as shown to the user.
    pub position: usize,
    pub display_name: String,
    pub source: PathBuf,
}
