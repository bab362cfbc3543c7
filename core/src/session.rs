//! QR session: size parameter, regeneration policy and working artifact

use std::io::Cursor;
use std::path::Path;

use image::{GrayImage, ImageFormat};
use serde::Serialize;

use crate::encoder::{Encode, QrEncoder};
use crate::export::{self, ExportOutcome};
use crate::lifecycle::WorkingFile;
use crate::preview::PreviewProjector;
use crate::resize::Resizer;
use crate::{Config, Error, Result};

/// Where the session stands relative to its working artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Nothing generated yet
    Empty,
    /// The artifact matches the current size
    Ready,
    /// The size changed but the artifact was not regenerated (yet)
    Stale,
}

/// Outcome of a size change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeChange {
    /// Ignored: outside `min_size..=max_size`, zero, or not a whole
    /// number of steps
    Rejected,
    /// Size updated; nothing to regenerate
    Updated { size: u32 },
    /// Size updated and the artifact re-rendered at the new size
    Regenerated { size: u32 },
}

/// Single-user QR generation session.
///
/// All operations run synchronously and to completion; the working file
/// is only ever replaced as a whole.
pub struct QrSession<E: Encode = QrEncoder> {
    config: Config,
    encoder: E,
    resizer: Resizer,
    projector: PreviewProjector,
    working: WorkingFile,
    text: String,
    size: u32,
    state: SessionState,
    artifact: Option<GrayImage>,
    preview: Option<GrayImage>,
}

impl QrSession<QrEncoder> {
    /// Create a session with the `qrcode`-backed encoder
    pub fn new(config: Config) -> Result<Self> {
        let encoder = QrEncoder::new(config.module_scale);
        Self::with_encoder(config, encoder)
    }
}

impl<E: Encode> QrSession<E> {
    /// Create a session with a custom encoder
    pub fn with_encoder(config: Config, encoder: E) -> Result<Self> {
        config.validate()?;

        let resizer = Resizer::default();
        let working = WorkingFile::reserve(&config.working_file)?;
        tracing::info!(
            "session started (size {}px, step {}px, working file {})",
            config.min_size,
            config.step,
            working.path().display()
        );

        Ok(Self {
            projector: PreviewProjector::new(config.preview_max, resizer),
            size: config.min_size,
            config,
            encoder,
            resizer,
            working,
            text: String::new(),
            state: SessionState::Empty,
            artifact: None,
            preview: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn has_artifact(&self) -> bool {
        self.artifact.is_some()
    }

    /// The latest generated image, at full size
    pub fn artifact(&self) -> Option<&GrayImage> {
        self.artifact.as_ref()
    }

    /// Display copy of the artifact, at most `preview_max` pixels wide
    pub fn preview(&self) -> Option<&GrayImage> {
        self.preview.as_ref()
    }

    pub fn working_path(&self) -> &Path {
        self.working.path()
    }

    pub fn size_label(&self) -> String {
        format!("QR code size: {}px", self.size)
    }

    /// Replace the source text. Does not regenerate.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Clear the source text; the artifact, size and state are kept.
    pub fn clear_input(&mut self) {
        self.text.clear();
    }

    /// Render the current text at the current size.
    ///
    /// Everything is computed before the working file is replaced, so on
    /// any error the file, the in-memory artifact and the state are
    /// exactly what they were before the call.
    pub fn generate(&mut self) -> Result<u32> {
        if self.text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let encoded = self.encoder.encode(&self.text)?;
        let artifact = self.resizer.resize(&encoded, self.size)?;
        let preview = self.projector.project(&artifact, self.size)?;
        let png = encode_png(&artifact)?;

        self.working.replace(&png)?;

        tracing::info!(
            "generated {}x{} QR code (preview {}px)",
            artifact.width(),
            artifact.height(),
            preview.width()
        );
        self.artifact = Some(artifact);
        self.preview = Some(preview);
        self.state = SessionState::Ready;
        Ok(self.size)
    }

    /// Move the size by `delta` pixels.
    ///
    /// Changes below the minimum, above the maximum or not a whole number
    /// of steps are ignored. Once something has been generated, an
    /// accepted change re-renders immediately; if that fails the session
    /// is left `Stale` at the new size and the error is returned.
    pub fn change_size(&mut self, delta: i64) -> Result<SizeChange> {
        let Some(size) = self.next_size(delta) else {
            tracing::debug!("size change {:+} from {}px rejected", delta, self.size);
            return Ok(SizeChange::Rejected);
        };

        self.size = size;
        if self.artifact.is_none() {
            return Ok(SizeChange::Updated { size });
        }

        self.state = SessionState::Stale;
        self.generate()?;
        Ok(SizeChange::Regenerated { size })
    }

    pub fn increase_size(&mut self) -> Result<SizeChange> {
        self.change_size(i64::from(self.config.step))
    }

    pub fn decrease_size(&mut self) -> Result<SizeChange> {
        self.change_size(-i64::from(self.config.step))
    }

    /// Copy the working file to `destination` (`None` = dialog cancelled).
    pub fn export(&self, destination: Option<&Path>) -> Result<ExportOutcome> {
        export::export(self.working.path(), destination)
    }

    /// Drop the artifact and delete the working file. Never fails.
    pub fn shutdown(&mut self) {
        self.working.cleanup();
        self.artifact = None;
        self.preview = None;
        self.state = SessionState::Empty;
        tracing::info!("session closed");
    }

    fn next_size(&self, delta: i64) -> Option<u32> {
        let step = i64::from(self.config.step);
        if delta == 0 || delta % step != 0 {
            return None;
        }

        let size = i64::from(self.size).checked_add(delta)?;
        if size < i64::from(self.config.min_size) || size > i64::from(self.config.max_size) {
            return None;
        }
        u32::try_from(size).ok()
    }
}

fn encode_png(image: &GrayImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
