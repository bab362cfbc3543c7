//! One-shot generation command.

use std::path::Path;

use anyhow::bail;
use qrgen_core::{Config, ExportOutcome, QrSession, SizeChange};

/// Generate a single QR code for `text` and save it to `output`.
pub fn make_code(config: Config, text: String, size: Option<u32>, output: &Path) -> anyhow::Result<()> {
    let mut session = QrSession::new(config)?;
    session.set_text(text);

    if let Some(size) = size {
        let delta = i64::from(size) - i64::from(session.size());
        if delta != 0 && session.change_size(delta)? == SizeChange::Rejected {
            let config = session.config();
            bail!(
                "size {}px is not available: use {}px to {}px in steps of {}px",
                size,
                config.min_size,
                config.max_size,
                config.step
            );
        }
    }

    session.generate()?;
    if let ExportOutcome::Saved { path, bytes } = session.export(Some(output))? {
        println!(
            "\x1b[1;32m✓\x1b[0m Saved {}x{} QR code to {} ({} bytes)",
            session.size(),
            session.size(),
            path.display(),
            bytes
        );
    }

    session.shutdown();
    Ok(())
}
