//! Line input parsing for the interactive session.

use std::path::PathBuf;

use qrgen_core::UiEvent;

/// One parsed line of user input
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Event(UiEvent),
    /// `save` without a path: ask for one
    SaveAs,
    Paste,
    Help,
    Blank,
    Unknown(String),
}

/// Parse a line typed at the prompt.
pub fn parse(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Blank;
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (trimmed, ""),
    };

    let event = match word {
        "set" | "text" => UiEvent::TextChanged(rest.to_string()),
        "gen" | "generate" => UiEvent::Generate,
        "+" | "bigger" => UiEvent::IncreaseSize,
        "-" | "smaller" => UiEvent::DecreaseSize,
        "clear" => UiEvent::Clear,
        "about" | "?" => UiEvent::About,
        "quit" | "exit" | "q" => UiEvent::Close,
        "save" if rest.is_empty() => return Input::SaveAs,
        "save" => UiEvent::Save(Some(PathBuf::from(rest))),
        "paste" => return Input::Paste,
        "help" | "h" => return Input::Help,
        other => return Input::Unknown(other.to_string()),
    };
    Input::Event(event)
}

/// Answer to the save prompt: `None` cancels, blank picks `default`.
pub fn parse_save_answer(answer: Option<&str>, default: &str) -> Option<PathBuf> {
    let answer = answer?.trim();
    match answer {
        "cancel" => None,
        "" => Some(PathBuf::from(default)),
        path => Some(PathBuf::from(path)),
    }
}
