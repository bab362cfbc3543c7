//! Clipboard access for the `paste` command.

use arboard::Clipboard;

/// Read the clipboard text, if any. Trailing line breaks are dropped.
pub fn read_text() -> anyhow::Result<Option<String>> {
    let mut clipboard = Clipboard::new()?;

    match clipboard.get_text() {
        Ok(text) => {
            let text = text.trim_end_matches(['\r', '\n']);
            Ok((!text.is_empty()).then(|| text.to_string()))
        }
        Err(arboard::Error::ContentNotAvailable) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
