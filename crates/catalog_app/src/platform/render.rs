use std::fmt::Write;

use catalog_core::{AppViewModel, CameraAccess, CameraFacing, Screen, StatusKind};

/// Renders the current screen as console text.
pub(crate) fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    match view.screen {
        Screen::Main => {
            let _ = writeln!(out, "== Inventory Tracker ==");
        }
        Screen::Camera => {
            let facing = match view.facing {
                CameraFacing::Back => "back",
                CameraFacing::Front => "front",
            };
            let _ = writeln!(out, "== Camera ({facing}) ==  snap | flip | close");
        }
    }
    if view.camera == CameraAccess::Denied {
        let _ = writeln!(out, "No access to camera");
    }
    let item = if view.item_name.is_empty() {
        "<none>"
    } else {
        view.item_name.as_str()
    };
    let _ = writeln!(out, "Item: {item}");
    let _ = writeln!(out, "Save location: {}", view.destination.display());
    if view.entries.is_empty() {
        let _ = writeln!(out, "No photos yet.");
    } else {
        let _ = writeln!(out, "Photos:");
        for row in &view.entries {
            let _ = writeln!(
                out,
                "  {}. {}  ({})",
                row.position,
                row.display_name,
                row.source.display()
            );
        }
    }
    if view.busy {
        let _ = writeln!(out, "Working...");
    }
    if let Some(status) = &view.status {
        let marker = match status.kind {
            StatusKind::Info => ">",
            StatusKind::Error => "!",
        };
        for line in status.text.lines() {
            let _ = writeln!(out, "{marker} {line}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render;
    use catalog_core::{update, AppState, ImageHandle, Msg};

    #[test]
    fn main_screen_lists_photos_and_status() {
        let state = [
            Msg::PermissionResolved { granted: true },
            Msg::ItemNameChanged("chair".to_string()),
            Msg::OpenCameraClicked,
            Msg::TakePictureClicked,
            Msg::PhotoCaptured {
                handle: ImageHandle::new("/roll/a.jpg"),
            },
        ]
        .into_iter()
        .fold(AppState::with_default_destination("/docs"), |state, msg| {
            update(state, msg).0
        });

        let text = render(&state.view());

        assert_eq!(
            text,
            "== Inventory Tracker ==\n\
             Item: chair\n\
             Save location: /docs\n\
             Photos:\n  1. chair_1  (/roll/a.jpg)\n\
             > Captured chair_1\n"
        );
    }

    #[test]
    fn denied_camera_is_shown() {
        let (state, _) = update(AppState::new(), Msg::PermissionResolved { granted: false });
        assert!(render(&state.view()).contains("No access to camera"));
    }
}
