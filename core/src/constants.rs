//! Centralized defaults
//!
//! Every tunable value of a session is defined here and copied into
//! [`crate::Config`] by its `Default` impl.

/// Smallest allowed QR image side, in pixels
pub const MIN_QR_SIZE: u32 = 200;

/// Largest allowed QR image side, in pixels
pub const MAX_QR_SIZE: u32 = 4000;

/// Size increment applied by the +/- controls, in pixels
pub const QR_SIZE_STEP: u32 = 50;

/// Largest preview side shown on screen, in pixels
pub const PREVIEW_MAX_SIZE: u32 = 350;

/// Pixels per QR module rendered by the encoder before resizing
pub const MODULE_SCALE: u32 = 10;

/// Largest module scale accepted by the configuration
pub const MAX_MODULE_SCALE: u32 = 100;

/// Largest side the resizer will allocate, in pixels
pub const MAX_RESIZE_SIDE: u32 = 16_384;

/// Reserved working file name, relative to the process working directory
pub const WORKING_FILE_NAME: &str = "temp_qrcode.png";

/// File name suggested when exporting
pub const DEFAULT_EXPORT_NAME: &str = "qrcode.png";

/// Extension appended to export targets that have none
pub const DEFAULT_EXPORT_EXTENSION: &str = "png";

/// Application name shown in the about dialog
pub const APP_NAME: &str = "qrgen";
