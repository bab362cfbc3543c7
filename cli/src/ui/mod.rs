//! UI utilities for terminal output.

mod banner;
mod feedback;
mod preview;

pub use banner::{print_banner, print_help};
pub use feedback::print_feedback;
pub use preview::print_preview;
