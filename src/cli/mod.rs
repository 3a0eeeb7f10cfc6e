//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod generate;
mod init;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::render::OutputFormat;

/// Process exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// svgicons - Generate UI icon components from a directory of SVG files
#[derive(Parser)]
#[command(name = "svgicons")]
#[command(about = "Generate a module of configurable icon components from a directory of SVG files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the icon module
    Generate {
        /// Directory containing the .svg files (default: project.src)
        input: Option<PathBuf>,

        /// Directory receiving the generated module (default: project.out)
        output: Option<PathBuf>,

        /// Path to icons.toml (default: discovered from the working directory)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Width for icons without one (e.g. "24px")
        #[arg(long)]
        width: Option<String>,

        /// Height for icons without one (e.g. "24px")
        #[arg(long)]
        height: Option<String>,

        /// Suffix appended to every component name (e.g. "Icon")
        #[arg(long)]
        suffix: Option<String>,

        /// Output syntax
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Artifact file name (default: icons.<ext>)
        #[arg(short, long)]
        output_file: Option<String>,

        /// Name untitled icons after their file instead of Icon<N>
        #[arg(long)]
        use_file_names: bool,

        /// Glob pattern of file names to leave out (repeatable)
        #[arg(long)]
        exclude: Vec<String>,

        /// Exit with an error when any icon fails
        #[arg(long)]
        strict: bool,

        /// Print the module to stdout instead of writing it
        #[arg(long)]
        dry_run: bool,

        /// Report progress as JSON lines on stderr
        #[arg(long)]
        json: bool,

        /// Report every processed file
        #[arg(short, long)]
        verbose: bool,
    },
    /// Write a starter icons.toml in the current directory
    Init {
        /// Overwrite an existing icons.toml
        #[arg(long)]
        force: bool,
    },
}

/// Parse arguments and run the selected command.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            config,
            width,
            height,
            suffix,
            format,
            output_file,
            use_file_names,
            exclude,
            strict,
            dry_run,
            json,
            verbose,
        } => generate::run_generate(generate::GenerateArgs {
            input,
            output,
            config,
            width,
            height,
            suffix,
            format,
            output_file,
            use_file_names,
            exclude,
            strict,
            dry_run,
            json,
            verbose,
        }),
        Commands::Init { force } => init::run_init(force),
    }
}
