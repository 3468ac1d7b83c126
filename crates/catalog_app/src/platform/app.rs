use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use catalog_core::{update, AppState, Msg};
use catalog_engine::{EngineHandle, FolderCamera, LocalFileSystem};
use catalog_logging::catalog_info;

use super::commands::{parse_command, Command, HELP};
use super::effects::EffectRunner;
use super::picker::ConsolePicker;
use super::render::render;
use super::{logging, settings};

pub fn run_app() -> anyhow::Result<()> {
    let settings_dir = std::env::current_dir()?;
    let settings = settings::load_settings(&settings_dir);
    logging::initialize(&settings);
    catalog_info!("Starting with {:?}", settings);

    let engine = EngineHandle::new(
        Arc::new(FolderCamera::new(settings.camera_roll.clone())),
        Arc::new(LocalFileSystem),
    )?;
    let state = AppState::with_default_destination(settings.default_destination.clone());
    let runner = EffectRunner::new(engine, settings_dir, settings);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), state, runner);
    console.run()?;
    Ok(())
}

/// Line-oriented front end: one command per line, one screen per change.
struct Console<R, W> {
    input: R,
    output: W,
    state: AppState,
    runner: EffectRunner,
}

impl<R: BufRead, W: Write> Console<R, W> {
    fn new(input: R, output: W, state: AppState, runner: EffectRunner) -> Self {
        Self {
            input,
            output,
            state,
            runner,
        }
    }

    fn run(&mut self) -> io::Result<()> {
        let permission = self.runner.request_permission();
        self.dispatch(permission)?;
        writeln!(self.output, "Type help for commands.")?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match parse_command(&line) {
                Ok(Command::Dispatch(msg)) => self.dispatch(msg)?,
                Ok(Command::Show) => {
                    let text = render(&self.state.view());
                    write!(self.output, "{text}")?;
                }
                Ok(Command::Help) => writeln!(self.output, "{HELP}")?,
                Ok(Command::Quit) => break,
                Err(problem) => writeln!(self.output, "! {problem}")?,
            }
        }
        catalog_info!("Console closed");
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            catalog_logging::set_active_item(self.state.session().item_name());
            for effect in effects {
                let mut picker = ConsolePicker::new(&mut self.input, &mut self.output);
                inbox.push_back(self.runner.run(effect, &mut picker));
            }
        }

        if self.state.consume_dirty() {
            let text = render(&self.state.view());
            write!(self.output, "{text}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::Path;

    use tempfile::TempDir;

    use crate::platform::settings::{load_settings, Settings};

    fn run_script(root: &Path, script: &str) -> (String, AppState) {
        let settings = Settings {
            default_destination: root.join("docs"),
            camera_roll: root.join("roll"),
            ..Settings::default()
        };
        let engine = EngineHandle::new(
            Arc::new(FolderCamera::new(settings.camera_roll.clone())),
            Arc::new(LocalFileSystem),
        )
        .unwrap();
        let state = AppState::with_default_destination(settings.default_destination.clone());
        let runner = EffectRunner::new(engine, root.to_path_buf(), settings);
        let mut output = Vec::new();
        let mut console = Console::new(
            Cursor::new(script.as_bytes().to_vec()),
            &mut output,
            state,
            runner,
        );
        console.run().unwrap();
        let state = console.state.clone();
        drop(console);
        (String::from_utf8(output).unwrap(), state)
    }

    fn roll(root: &Path, count: usize) {
        let dir = root.join("roll");
        std::fs::create_dir_all(&dir).unwrap();
        for n in 1..=count {
            std::fs::write(dir.join(format!("IMG_{n:04}.jpg")), format!("img{n}")).unwrap();
        }
    }

    #[test]
    fn capture_edit_and_save_session() {
        let temp = TempDir::new().unwrap();
        roll(temp.path(), 3);
        let out = temp.path().join("out");
        let script = format!(
            "name widget\nopen\nsnap\nopen\nsnap\nopen\nsnap\ndelete 2\npick\n{}\nsave\nquit\n",
            out.display()
        );

        let (text, state) = run_script(temp.path(), &script);

        let folder = out.join("widget");
        assert_eq!(std::fs::read(folder.join("widget_1.jpg")).unwrap(), b"img1");
        assert_eq!(std::fs::read(folder.join("widget_2.jpg")).unwrap(), b"img3");
        assert!(!folder.join("widget_3.jpg").exists());
        assert!(text.contains("Images saved successfully at:"));
        assert!(state.session().is_empty());
        assert_eq!(state.destination(), temp.path().join("docs"));
    }

    #[test]
    fn missing_roll_blocks_camera() {
        let temp = TempDir::new().unwrap();

        let (text, state) = run_script(temp.path(), "name vase\nopen\nsnap\n");

        assert!(text.contains("! No access to camera"));
        assert!(state.session().is_empty());
    }

    #[test]
    fn default_command_writes_settings() {
        let temp = TempDir::new().unwrap();
        let shelf = temp.path().join("shelf");
        let script = format!("pick\n{}\ndefault\n", shelf.display());

        run_script(temp.path(), &script);

        assert_eq!(load_settings(temp.path()).default_destination, shelf);
    }

    #[test]
    fn bad_commands_are_reported_and_ignored() {
        let temp = TempDir::new().unwrap();

        let (text, _) = run_script(temp.path(), "delete zero\nsave\n");

        assert!(text.contains("! expected a photo number"));
        assert!(text.contains("! Please take pictures before saving."));
    }
}
