//! Line commands standing in for the page controls.

use viewer_core::{FontSizeDirection, Msg, SelectedFile};

pub const HELP_TEXT: &str = "commands: open <path.pdf> | open (cancel) | a+ | a- | theme light|dark|sepia|<name> | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Page(Msg),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        // A bare `open` is a picker dismissed without a choice.
        "open" => Command::Page(Msg::FileSelected(SelectedFile::from_path(unquote(rest)))),
        "a+" => Command::Page(Msg::FontSizeAdjusted(FontSizeDirection::Increase)),
        "a-" => Command::Page(Msg::FontSizeAdjusted(FontSizeDirection::Decrease)),
        "theme" => {
            let theme = match rest {
                "" | "light" => None,
                name => Some(name.to_string()),
            };
            Command::Page(Msg::ThemeSelected(theme))
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

fn unquote(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(raw)
}
