use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use catalog_engine::{DestinationPicker, PickOutcome};

/// Asks for a folder on the console; an empty answer cancels.
pub(crate) struct ConsolePicker<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> ConsolePicker<'a, R, W> {
    pub(crate) fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> DestinationPicker for ConsolePicker<'_, R, W> {
    fn pick(&mut self) -> io::Result<PickOutcome> {
        write!(self.output, "Save location (empty to cancel): ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(PickOutcome::Cancelled);
        }
        let answer = line.trim();
        if answer.is_empty() {
            Ok(PickOutcome::Cancelled)
        } else {
            Ok(PickOutcome::Picked(PathBuf::from(answer)))
        }
    }
}
