//! qrgen CLI - QR code generator for the terminal.

mod clipboard;
mod commands;
mod input;
mod ui;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use qrgen_core::Config;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrgen")]
#[command(about = "Generate, preview and save QR codes", long_about = None)]
struct Cli {
    /// Transient working file holding the latest QR code
    #[arg(long, default_value = qrgen_core::constants::WORKING_FILE_NAME)]
    working_file: PathBuf,

    /// Smallest (and starting) QR code size in pixels
    #[arg(long, default_value_t = qrgen_core::constants::MIN_QR_SIZE)]
    min_size: u32,

    /// Largest QR code size in pixels
    #[arg(long, default_value_t = qrgen_core::constants::MAX_QR_SIZE)]
    max_size: u32,

    /// Size change per +/- step in pixels
    #[arg(long, default_value_t = qrgen_core::constants::QR_SIZE_STEP)]
    step: u32,

    /// Largest preview size in pixels
    #[arg(long, default_value_t = qrgen_core::constants::PREVIEW_MAX_SIZE)]
    preview_max: u32,

    /// Print one JSON object per event instead of formatted output
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    fn config(&self) -> Config {
        Config::default()
            .with_working_file(&self.working_file)
            .with_sizes(self.min_size, self.step)
            .with_max_size(self.max_size)
            .with_preview_max(self.preview_max)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    Run,
    /// Show the effective configuration
    Info,
    /// Generate one QR code and save it
    Make {
        /// Text or link to encode
        text: String,
        /// Size in pixels; must be reachable from the minimum in whole steps
        #[arg(short, long)]
        size: Option<u32>,
        /// Destination file
        #[arg(short, long, default_value = qrgen_core::constants::DEFAULT_EXPORT_NAME)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("qrgen=info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run_session(config, cli.json)?,
        Commands::Info => commands::show_info(&config),
        Commands::Make { text, size, output } => commands::make_code(config, text, size, &output)?,
    }

    Ok(())
}
