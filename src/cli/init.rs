//! Init command implementation

use std::path::PathBuf;
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::config::{write_default_config, ConfigError};

/// Execute the init command
pub fn run_init(force: bool) -> ExitCode {
    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    match write_default_config(&dir, force) {
        Ok(path) => {
            println!("Created {}", path.display());
            println!();
            println!("Next steps:");
            println!("  put your .svg files in icons/");
            println!("  svgicons generate");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(ConfigError::AlreadyExists(path)) => {
            eprintln!("Error: {} already exists", path.display());
            eprintln!("Use --force to overwrite it");
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
