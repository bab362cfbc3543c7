//! Interactive session command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use qrgen_core::constants::DEFAULT_EXPORT_NAME;
use qrgen_core::lifecycle::remove_best_effort;
use qrgen_core::{Config, QrSession, UiEvent};

use crate::clipboard;
use crate::input::{self, Input};
use crate::ui::{print_banner, print_feedback, print_help};

/// Run an interactive session on stdin/stdout.
///
/// Each line is one UI event. End of input behaves like `quit`.
pub fn run_session(config: Config, json: bool) -> anyhow::Result<()> {
    let mut session = QrSession::new(config)?;

    // Ctrl+C skips the normal shutdown path, so clean up here
    let working_path = session.working_path().to_path_buf();
    ctrlc::set_handler(move || {
        remove_best_effort(&working_path);
        std::process::exit(130);
    })?;

    if !json {
        print_banner();
        print_help();
        println!("\x1b[2m{}\x1b[0m", session.size_label());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if !json {
            print!("\x1b[1;36mqrgen>\x1b[0m ");
            io::stdout().flush()?;
        }

        let event = match lines.next().transpose()? {
            None => UiEvent::Close,
            Some(line) => match next_event(&session, &line, json, &mut lines)? {
                Some(event) => event,
                None => continue,
            },
        };

        tracing::debug!("event: {:?}", event);
        let feedback = session.handle(event);
        if json {
            println!("{}", serde_json::to_string(&feedback)?);
        } else {
            print_feedback(&session, &feedback);
        }

        if feedback.closed {
            break;
        }
    }

    Ok(())
}

/// Turn one input line into an event; `None` when there is nothing to send.
fn next_event<B: BufRead>(
    session: &QrSession,
    line: &str,
    json: bool,
    lines: &mut io::Lines<B>,
) -> anyhow::Result<Option<UiEvent>> {
    let event = match input::parse(line) {
        Input::Event(event) => event,
        Input::Blank => return Ok(None),
        Input::Help => {
            print_help();
            return Ok(None);
        }
        Input::Unknown(word) => {
            eprintln!("unknown command `{}` (try `help`)", word);
            return Ok(None);
        }
        Input::Paste => match clipboard::read_text() {
            Ok(Some(text)) => {
                if !json {
                    println!("\x1b[2mText: {}\x1b[0m", text);
                }
                UiEvent::TextChanged(text)
            }
            Ok(None) => {
                eprintln!("clipboard has no text");
                return Ok(None);
            }
            Err(e) => {
                eprintln!("clipboard unavailable: {}", e);
                return Ok(None);
            }
        },
        // Nothing to save yet, or no one to ask: let the session decide
        Input::SaveAs if json || !session.has_artifact() => {
            UiEvent::Save(Some(PathBuf::from(DEFAULT_EXPORT_NAME)))
        }
        Input::SaveAs => {
            print!("Save as [{}] (`cancel` to abort): ", DEFAULT_EXPORT_NAME);
            io::stdout().flush()?;
            let answer = lines.next().transpose()?;
            UiEvent::Save(input::parse_save_answer(answer.as_deref(), DEFAULT_EXPORT_NAME))
        }
    };
    Ok(Some(event))
}
