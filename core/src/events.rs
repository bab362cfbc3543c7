//! UI event handling
//!
//! Front-ends translate their native input into [`UiEvent`]s and render
//! the [`Feedback`] returned for each one. Recoverable input problems end
//! up in the status line; dependency and I/O failures become a blocking
//! error dialog. Nothing here is fatal to the session.

use std::path::PathBuf;

use serde::Serialize;

use crate::constants::APP_NAME;
use crate::encoder::Encode;
use crate::export::ExportOutcome;
use crate::session::{QrSession, SessionState, SizeChange};
use crate::Error;

/// Input events a front-end can deliver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The input field now holds this text
    TextChanged(String),
    Generate,
    /// Save to the chosen path; `None` when the dialog was cancelled
    Save(Option<PathBuf>),
    Clear,
    IncreaseSize,
    DecreaseSize,
    About,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogKind {
    Error,
    Info,
}

/// A blocking message the front-end must show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    fn error(err: &Error) -> Self {
        Self {
            kind: DialogKind::Error,
            title: "Error".to_string(),
            message: format!("An error occurred: {}", err),
        }
    }

    fn about() -> Self {
        Self {
            kind: DialogKind::Info,
            title: "About".to_string(),
            message: format!(
                "{} {}\nQR code generator: type text, adjust the size, save as PNG.",
                APP_NAME,
                env!("CARGO_PKG_VERSION")
            ),
        }
    }
}

/// What the front-end should display after an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    /// New status line text; `None` leaves the current one in place
    pub status: Option<String>,
    pub dialog: Option<Dialog>,
    pub size_label: String,
    pub state: SessionState,
    /// The preview image was recomputed and should be redrawn
    pub preview_updated: bool,
    /// The session shut down; the front-end should exit
    pub closed: bool,
}

const GENERATED_STATUS: &str = "QR code generated successfully!";

/// Display changes collected while handling one event
#[derive(Default)]
struct Pending {
    status: Option<String>,
    dialog: Option<Dialog>,
    preview_updated: bool,
}

impl Pending {
    fn generated(&mut self) {
        self.status = Some(GENERATED_STATUS.to_string());
        self.preview_updated = true;
    }

    fn size_changed(&mut self, change: crate::Result<SizeChange>) {
        match change {
            Ok(SizeChange::Regenerated { .. }) => self.generated(),
            Ok(SizeChange::Updated { .. } | SizeChange::Rejected) => {}
            Err(e) => self.failed(e),
        }
    }

    fn failed(&mut self, err: Error) {
        if err.is_blocking() {
            tracing::warn!("{}", err);
            self.dialog = Some(Dialog::error(&err));
        } else {
            self.status = Some(err.to_string());
        }
    }
}

impl<E: Encode> QrSession<E> {
    /// Apply one UI event and describe the result.
    pub fn handle(&mut self, event: UiEvent) -> Feedback {
        let mut pending = Pending::default();
        let mut closed = false;

        match event {
            UiEvent::TextChanged(text) => self.set_text(text),
            UiEvent::Clear => self.clear_input(),
            UiEvent::Generate => match self.generate() {
                Ok(_) => pending.generated(),
                Err(e) => pending.failed(e),
            },
            UiEvent::IncreaseSize => pending.size_changed(self.increase_size()),
            UiEvent::DecreaseSize => pending.size_changed(self.decrease_size()),
            UiEvent::Save(destination) => match self.export(destination.as_deref()) {
                Ok(ExportOutcome::Saved { path, .. }) => {
                    pending.status = Some(format!("QR code saved to {}", path.display()));
                }
                Ok(ExportOutcome::Cancelled) => {}
                Err(e) => pending.failed(e),
            },
            UiEvent::About => pending.dialog = Some(Dialog::about()),
            UiEvent::Close => {
                self.shutdown();
                closed = true;
            }
        }

        Feedback {
            status: pending.status,
            dialog: pending.dialog,
            size_label: self.size_label(),
            state: self.state(),
            preview_updated: pending.preview_updated,
            closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> QrSession {
        let config = Config::default().with_working_file(dir.path().join("temp_qrcode.png"));
        QrSession::new(config).unwrap()
    }

    #[test]
    fn test_generate_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);

        let feedback = session.handle(UiEvent::TextChanged("https://example.com".to_string()));
        assert_eq!(feedback.status, None);
        assert_eq!(feedback.state, SessionState::Empty);

        let feedback = session.handle(UiEvent::Generate);
        assert_eq!(feedback.status.as_deref(), Some(GENERATED_STATUS));
        assert!(feedback.preview_updated);
        assert_eq!(feedback.state, SessionState::Ready);
        assert!(feedback.dialog.is_none());
    }

    #[test]
    fn test_empty_input_is_a_status_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);

        let feedback = session.handle(UiEvent::Generate);
        assert_eq!(feedback.status, Some(Error::EmptyInput.to_string()));
        assert!(feedback.dialog.is_none());
        assert!(!feedback.preview_updated);
    }

    #[test]
    fn test_encoding_error_is_a_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        session.handle(UiEvent::TextChanged("x".repeat(8000)));

        let feedback = session.handle(UiEvent::Generate);
        let dialog = feedback.dialog.unwrap();
        assert_eq!(dialog.kind, DialogKind::Error);
        assert!(dialog.message.starts_with("An error occurred"));
        assert_eq!(feedback.state, SessionState::Empty);
    }

    #[test]
    fn test_size_buttons_update_label() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);

        let feedback = session.handle(UiEvent::IncreaseSize);
        assert_eq!(feedback.size_label, "QR code size: 250px");
        assert!(!feedback.preview_updated);

        session.handle(UiEvent::DecreaseSize);
        let feedback = session.handle(UiEvent::DecreaseSize);
        assert_eq!(feedback.size_label, "QR code size: 200px");
        assert_eq!(feedback.status, None);
    }

    #[test]
    fn test_size_change_after_generate_redraws_preview() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        session.handle(UiEvent::TextChanged("hello".to_string()));
        session.handle(UiEvent::Generate);

        let feedback = session.handle(UiEvent::IncreaseSize);
        assert!(feedback.preview_updated);
        assert_eq!(feedback.state, SessionState::Ready);
        assert_eq!(session.preview().unwrap().dimensions(), (250, 250));
    }

    #[test]
    fn test_save_flow() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        let dest = dir.path().join("out.png");

        let feedback = session.handle(UiEvent::Save(Some(dest.clone())));
        assert_eq!(feedback.status, Some(Error::NoArtifact.to_string()));
        assert!(!dest.exists());

        session.handle(UiEvent::TextChanged("hello".to_string()));
        session.handle(UiEvent::Generate);

        let feedback = session.handle(UiEvent::Save(None));
        assert_eq!(feedback.status, None);
        assert!(feedback.dialog.is_none());

        let feedback = session.handle(UiEvent::Save(Some(dest.clone())));
        assert_eq!(feedback.status, Some(format!("QR code saved to {}", dest.display())));
        assert!(dest.exists());
    }

    #[test]
    fn test_about_and_close() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(&dir);
        session.handle(UiEvent::TextChanged("hello".to_string()));
        session.handle(UiEvent::Generate);

        let about = session.handle(UiEvent::About).dialog.unwrap();
        assert_eq!(about.kind, DialogKind::Info);
        assert!(about.message.contains(APP_NAME));

        let path = session.working_path().to_path_buf();
        let feedback = session.handle(UiEvent::Close);
        assert!(feedback.closed);
        assert!(!path.exists());
    }
}
