use crate::state::PendingOp;
use crate::view_model::StatusMessage;
use crate::{validate_file_name, AppState, CameraAccess, Effect, Msg, ValidationError};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ItemNameChanged(name) => {
            state.session_mut().set_item_name(&name);
            Vec::new()
        }
        Msg::PermissionResolved { granted } => {
            let access = if granted {
                CameraAccess::Granted
            } else {
                CameraAccess::Denied
            };
            state.set_camera(access);
            Vec::new()
        }
        Msg::OpenCameraClicked => {
            if state.camera() == CameraAccess::Granted {
                state.set_camera_open(true);
            } else {
                state.set_status(StatusMessage::error("No access to camera"));
            }
            Vec::new()
        }
        Msg::CloseCameraClicked => {
            // Leaving the camera abandons the session, matching the cancel action.
            state.session_mut().clear();
            state.set_camera_open(false);
            Vec::new()
        }
        Msg::FlipCameraClicked => {
            state.flip_facing();
            Vec::new()
        }
        Msg::TakePictureClicked => {
            if !state.is_camera_open() || state.pending().is_some() {
                return (state, Vec::new());
            }
            match check_item_name(state.session().item_name()) {
                Ok(()) => {
                    state.set_pending(Some(PendingOp::Capture));
                    vec![Effect::Capture {
                        facing: state.facing(),
                    }]
                }
                Err(ValidationError::EmptyItemName) => {
                    state.set_status(StatusMessage::error(
                        "Please enter an item name before taking a picture.",
                    ));
                    Vec::new()
                }
                Err(err) => {
                    state.set_status(StatusMessage::error(format!("Invalid item name: {err}")));
                    Vec::new()
                }
            }
        }
        Msg::PhotoCaptured { handle } => {
            if state.pending() == Some(PendingOp::Capture) {
                state.set_pending(None);
            }
            state.set_camera_open(false);
            let outcome = state
                .session_mut()
                .append(handle)
                .map(|entry| entry.display_name.clone());
            match outcome {
                Ok(name) => state.set_status(StatusMessage::info(format!("Captured {name}"))),
                Err(err) => {
                    state.set_status(StatusMessage::error(format!("Could not add photo: {err}")))
                }
            }
            Vec::new()
        }
        Msg::CaptureFailed { message } => {
            if state.pending() == Some(PendingOp::Capture) {
                state.set_pending(None);
            }
            state.set_status(StatusMessage::error(format!("Capture failed: {message}")));
            Vec::new()
        }
        Msg::PhotoRenamed { index, name } => {
            if let Err(err) = state.session_mut().rename(index, &name) {
                state.set_status(StatusMessage::error(format!("Rename failed: {err}")));
            }
            Vec::new()
        }
        Msg::DeletePhotoClicked { index } => {
            if let Err(err) = state.session_mut().delete(index) {
                state.set_status(StatusMessage::error(format!("Delete failed: {err}")));
            }
            Vec::new()
        }
        Msg::PickDestinationClicked => {
            if state.pending().is_some() {
                Vec::new()
            } else {
                vec![Effect::PickDestination]
            }
        }
        Msg::DestinationPicked(path) => {
            let text = format!("Selected save location: {}", path.display());
            state.set_destination(path);
            state.set_status(StatusMessage::info(text));
            Vec::new()
        }
        Msg::DestinationPickFailed { message } => {
            state.set_status(StatusMessage::error(format!(
                "Failed to pick save location: {message}"
            )));
            Vec::new()
        }
        Msg::MakeDestinationDefaultClicked => {
            state.make_destination_default();
            let path = state.destination().to_path_buf();
            state.set_status(StatusMessage::info(format!(
                "Default save location: {}",
                path.display()
            )));
            vec![Effect::StoreDefaultDestination { path }]
        }
        Msg::DestinationPickCancelled | Msg::NoOp => Vec::new(),
        Msg::SaveClicked => {
            if state.pending().is_some() {
                return (state, Vec::new());
            }
            match state.session().snapshot(state.destination()) {
                Ok(request) => {
                    state.set_pending(Some(PendingOp::Save));
                    vec![Effect::Save { request }]
                }
                Err(ValidationError::NoPhotos) => {
                    state.set_status(StatusMessage::error("Please take pictures before saving."));
                    Vec::new()
                }
                Err(err) => {
                    state.set_status(StatusMessage::error(format!("Save failed: {err}")));
                    Vec::new()
                }
            }
        }
        Msg::SaveSucceeded { paths } => {
            if state.pending() == Some(PendingOp::Save) {
                state.set_pending(None);
            }
            state.session_mut().clear();
            state.reset_destination();
            let listing = paths
                .iter()
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join("\n");
            state.set_status(StatusMessage::info(format!(
                "Images saved successfully at:\n{listing}"
            )));
            Vec::new()
        }
        Msg::SaveFailed { message } => {
            if state.pending() == Some(PendingOp::Save) {
                state.set_pending(None);
            }
            state.set_status(StatusMessage::error(message));
            Vec::new()
        }
    };

    (state, effects)
}

fn check_item_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyItemName);
    }
    validate_file_name(name)
}
