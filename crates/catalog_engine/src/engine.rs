use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use catalog_core::{CameraFacing, SaveRequest};
use catalog_logging::{catalog_info, catalog_warn};

use crate::{
    Camera, CameraPermit, CaptureError, EngineEvent, FileSystem, Permission, SaveCoordinator,
};

enum EngineCommand {
    RequestPermission,
    Capture { facing: CameraFacing },
    Save { request: SaveRequest },
}

/// Runs camera and save work on a background thread with its own Tokio runtime.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(camera: Arc<dyn Camera>, fs: Arc<dyn FileSystem>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            let coordinator = Arc::new(SaveCoordinator::new(fs));
            let mut permit: Option<CameraPermit> = None;
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::RequestPermission => {
                        // Resolved inline so later captures see the permit.
                        let granted = match runtime.block_on(camera.request_permission()) {
                            Permission::Granted(token) => {
                                permit = Some(token);
                                true
                            }
                            Permission::Denied => {
                                permit = None;
                                false
                            }
                        };
                        let _ = event_tx.send(EngineEvent::PermissionResolved { granted });
                    }
                    EngineCommand::Capture { facing } => {
                        let Some(permit) = permit.clone() else {
                            catalog_warn!("Capture requested without camera permission");
                            let _ = event_tx.send(EngineEvent::CaptureCompleted {
                                result: Err(CaptureError::PermissionDenied),
                            });
                            continue;
                        };
                        let camera = camera.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = camera.capture(&permit, facing).await;
                            let _ = event_tx.send(EngineEvent::CaptureCompleted { result });
                        });
                    }
                    EngineCommand::Save { request } => {
                        let coordinator = coordinator.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = coordinator.save(&request).await;
                            let _ = event_tx.send(EngineEvent::SaveCompleted { result });
                        });
                    }
                }
            }
            catalog_info!("Engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn request_permission(&self) {
        let _ = self.cmd_tx.send(EngineCommand::RequestPermission);
    }

    pub fn capture(&self, facing: CameraFacing) {
        let _ = self.cmd_tx.send(EngineCommand::Capture { facing });
    }

    pub fn save(&self, request: SaveRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Save { request });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the engine thread is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }
}
