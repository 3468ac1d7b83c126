use std::path::{Path, PathBuf};

use crate::view_model::{AppViewModel, EntryRowView, Screen, StatusMessage};
use crate::PhotoSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraAccess {
    #[default]
    Pending,
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraFacing {
    #[default]
    Back,
    Front,
}

impl CameraFacing {
    pub fn flipped(self) -> Self {
        match self {
            CameraFacing::Back => CameraFacing::Front,
            CameraFacing::Front => CameraFacing::Back,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PendingOp {
    Capture,
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    session: PhotoSession,
    camera: CameraAccess,
    camera_open: bool,
    facing: CameraFacing,
    destination: PathBuf,
    default_destination: PathBuf,
    pending: Option<PendingOp>,
    status: Option<StatusMessage>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `destination` selected; successful saves fall back to it.
    pub fn with_default_destination(destination: impl Into<PathBuf>) -> Self {
        let destination = destination.into();
        Self {
            destination: destination.clone(),
            default_destination: destination,
            ..Self::default()
        }
    }

    pub fn session(&self) -> &PhotoSession {
        &self.session
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            screen: if self.camera_open {
                Screen::Camera
            } else {
                Screen::Main
            },
            camera: self.camera,
            facing: self.facing,
            item_name: self.session.item_name().to_string(),
            destination: self.destination.clone(),
            entries: self
                .session
                .entries()
                .iter()
                .enumerate()
                .map(|(index, entry)| EntryRowView {
                    position: index + 1,
                    display_name: entry.display_name.clone(),
                    source: entry.handle.location().to_path_buf(),
                })
                .collect(),
            busy: self.pending.is_some(),
            status: self.status.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn session_mut(&mut self) -> &mut PhotoSession {
        self.dirty = true;
        &mut self.session
    }

    pub(crate) fn camera(&self) -> CameraAccess {
        self.camera
    }

    pub(crate) fn set_camera(&mut self, camera: CameraAccess) {
        self.camera = camera;
        self.dirty = true;
    }

    pub(crate) fn is_camera_open(&self) -> bool {
        self.camera_open
    }

    pub(crate) fn set_camera_open(&mut self, open: bool) {
        self.camera_open = open;
        self.dirty = true;
    }

    pub(crate) fn facing(&self) -> CameraFacing {
        self.facing
    }

    pub(crate) fn flip_facing(&mut self) {
        self.facing = self.facing.flipped();
        self.dirty = true;
    }

    pub(crate) fn set_destination(&mut self, destination: PathBuf) {
        self.destination = destination;
        self.dirty = true;
    }

    pub(crate) fn make_destination_default(&mut self) {
        self.default_destination = self.destination.clone();
        self.dirty = true;
    }

    pub(crate) fn reset_destination(&mut self) {
        self.destination = self.default_destination.clone();
        self.dirty = true;
    }

    pub(crate) fn pending(&self) -> Option<PendingOp> {
        self.pending
    }

    pub(crate) fn set_pending(&mut self, pending: Option<PendingOp>) {
        self.pending = pending;
        self.dirty = true;
    }

    pub(crate) fn set_status(&mut self, status: StatusMessage) {
        self.status = Some(status);
        self.dirty = true;
    }
}
