//! Rendering of session feedback.

use qrgen_core::{DialogKind, Feedback, QrSession};

use super::print_preview;

/// Print the outcome of one event, redrawing the preview when it changed.
pub fn print_feedback(session: &QrSession, feedback: &Feedback) {
    if let Some(dialog) = &feedback.dialog {
        match dialog.kind {
            DialogKind::Error => {
                eprintln!("\x1b[1;31m✗ {}:\x1b[0m {}", dialog.title, dialog.message);
            }
            DialogKind::Info => {
                println!("\x1b[1m{}\x1b[0m", dialog.title);
                for line in dialog.message.lines() {
                    println!("  {}", line);
                }
            }
        }
    }

    if feedback.preview_updated {
        if let Some(preview) = session.preview() {
            println!();
            print_preview(preview);
            println!(
                "\x1b[2mPreview {}px, working file {}\x1b[0m",
                preview.width(),
                session.working_path().display()
            );
        }
    }

    if let Some(status) = &feedback.status {
        println!("\x1b[1;32m•\x1b[0m {}", status);
    }
    println!("\x1b[2m{}\x1b[0m", feedback.size_label);
}
