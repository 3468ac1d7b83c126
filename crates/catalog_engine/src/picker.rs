use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Picked(PathBuf),
    /// The user backed out; not an error.
    Cancelled,
}

/// Lets the user choose the folder photos are saved under.
pub trait DestinationPicker {
    fn pick(&mut self) -> io::Result<PickOutcome>;
}
