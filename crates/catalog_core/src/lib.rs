//! Catalog core: photo session bookkeeping and the pure UI state machine.
mod effect;
mod error;
mod msg;
mod name;
mod session;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::ValidationError;
pub use msg::Msg;
pub use name::{find_duplicate_name, validate_file_name};
pub use session::{ImageHandle, PhotoEntry, PhotoSession, SaveRequest};
pub use state::{AppState, CameraAccess, CameraFacing};
pub use update::update;
pub use view_model::{AppViewModel, EntryRowView, Screen, StatusKind, StatusMessage};
