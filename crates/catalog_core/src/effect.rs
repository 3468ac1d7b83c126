use crate::{CameraFacing, SaveRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Capture { facing: CameraFacing },
    PickDestination,
    Save { request: SaveRequest },
    StoreDefaultDestination { path: std::path::PathBuf },
}
