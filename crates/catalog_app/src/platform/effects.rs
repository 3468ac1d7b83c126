use std::path::PathBuf;

use catalog_core::{Effect, Msg};
use catalog_engine::{DestinationPicker, EngineEvent, EngineHandle, PickOutcome};
use catalog_logging::{catalog_error, catalog_info, catalog_warn};

use super::settings::{save_settings, Settings};

/// Executes effects and turns their outcome into the next message.
pub(crate) struct EffectRunner {
    engine: EngineHandle,
    settings_dir: PathBuf,
    settings: Settings,
}

impl EffectRunner {
    pub(crate) fn new(engine: EngineHandle, settings_dir: PathBuf, settings: Settings) -> Self {
        Self {
            engine,
            settings_dir,
            settings,
        }
    }

    pub(crate) fn request_permission(&self) -> Msg {
        self.engine.request_permission();
        self.wait_for_engine()
            .unwrap_or(Msg::PermissionResolved { granted: false })
    }

    pub(crate) fn run(&mut self, effect: Effect, picker: &mut dyn DestinationPicker) -> Msg {
        match effect {
            Effect::Capture { facing } => {
                catalog_info!("Capture facing={:?}", facing);
                self.engine.capture(facing);
                self.wait_for_engine().unwrap_or_else(|| Msg::CaptureFailed {
                    message: "engine stopped".to_string(),
                })
            }
            Effect::Save { request } => {
                catalog_info!(
                    "Save photos={} destination={:?}",
                    request.entries.len(),
                    request.destination
                );
                self.engine.save(request);
                self.wait_for_engine().unwrap_or_else(|| Msg::SaveFailed {
                    message: "save failed: engine stopped".to_string(),
                })
            }
            Effect::PickDestination => match picker.pick() {
                Ok(PickOutcome::Picked(path)) => Msg::DestinationPicked(path),
                Ok(PickOutcome::Cancelled) => Msg::DestinationPickCancelled,
                Err(err) => {
                    catalog_warn!("Destination picker failed: {}", err);
                    Msg::DestinationPickFailed {
                        message: err.to_string(),
                    }
                }
            },
            Effect::StoreDefaultDestination { path } => {
                self.settings.default_destination = path;
                match save_settings(&self.settings_dir, &self.settings) {
                    Ok(written) => catalog_info!("Stored settings at {:?}", written),
                    Err(err) => catalog_error!("Failed to store settings: {}", err),
                }
                Msg::NoOp
            }
        }
    }

    fn wait_for_engine(&self) -> Option<Msg> {
        self.engine.recv().map(map_event)
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PermissionResolved { granted } => Msg::PermissionResolved { granted },
        EngineEvent::CaptureCompleted { result } => match result {
            Ok(handle) => Msg::PhotoCaptured { handle },
            Err(err) => {
                catalog_warn!("Capture failed: {}", err);
                Msg::CaptureFailed {
                    message: err.to_string(),
                }
            }
        },
        EngineEvent::SaveCompleted { result } => match result {
            Ok(paths) => {
                catalog_info!("Saved {} photo(s)", paths.len());
                Msg::SaveSucceeded { paths }
            }
            Err(err) => {
                catalog_warn!("{}", err);
                Msg::SaveFailed {
                    message: err.to_string(),
                }
            }
        },
    }
}
