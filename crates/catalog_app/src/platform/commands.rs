use catalog_core::Msg;

pub(crate) const HELP: &str = "\
Commands:
  name <item>          set the item being catalogued
  open | close         show the camera / leave it (discards photos)
  flip                 switch between back and front camera
  snap                 take a picture
  rename <n> <name>    rename photo n
  delete <n>           delete photo n
  pick                 choose the save location
  default              keep the current save location as the default
  save                 save all photos
  list                 show the current screen
  help                 show this text
  quit                 exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Dispatch(Msg),
    Show,
    Help,
    Quit,
}

/// Parses one console line. Photo positions are 1-based.
pub(crate) fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" | "list" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "name" => Command::Dispatch(Msg::ItemNameChanged(rest.to_string())),
        "open" => Command::Dispatch(Msg::OpenCameraClicked),
        "close" | "cancel" => Command::Dispatch(Msg::CloseCameraClicked),
        "flip" => Command::Dispatch(Msg::FlipCameraClicked),
        "snap" => Command::Dispatch(Msg::TakePictureClicked),
        "pick" => Command::Dispatch(Msg::PickDestinationClicked),
        "default" => Command::Dispatch(Msg::MakeDestinationDefaultClicked),
        "save" => Command::Dispatch(Msg::SaveClicked),
        "delete" | "rm" => {
            let index = parse_position(rest)?;
            Command::Dispatch(Msg::DeletePhotoClicked { index })
        }
        "rename" => {
            let (position, name) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: rename <n> <name>".to_string())?;
            let index = parse_position(position)?;
            Command::Dispatch(Msg::PhotoRenamed {
                index,
                name: name.trim().to_string(),
            })
        }
        other => return Err(format!("unknown command {other:?}; type help")),
    };
    Ok(command)
}

fn parse_position(text: &str) -> Result<usize, String> {
    let position: usize = text
        .trim()
        .parse()
        .map_err(|_| format!("expected a photo number, got {text:?}"))?;
    if position == 0 {
        return Err("photo numbers start at 1".to_string());
    }
    Ok(position - 1)
}
