//! CLI command implementations.

mod info;
mod make;
mod run;

pub use info::show_info;
pub use make::make_code;
pub use run::run_session;
