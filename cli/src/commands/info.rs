//! Info command implementation.

use qrgen_core::Config;

/// Display the effective configuration.
pub fn show_info(config: &Config) {
    println!("\n\x1b[1mqrgen configuration\x1b[0m");
    println!("═══════════════════════════════════════");
    println!("\x1b[1mVersion:\x1b[0m      {}", env!("CARGO_PKG_VERSION"));
    println!("\x1b[1mMin size:\x1b[0m     {}px", config.min_size);
    println!("\x1b[1mMax size:\x1b[0m     {}px", config.max_size);
    println!("\x1b[1mStep:\x1b[0m         {}px", config.step);
    println!("\x1b[1mPreview max:\x1b[0m  {}px", config.preview_max);
    println!("\x1b[1mModule scale:\x1b[0m {}px", config.module_scale);
    println!("\x1b[1mWorking file:\x1b[0m {}", config.working_file.display());
    println!();
}
