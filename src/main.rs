//! svgicons - Command-line tool for generating icon components from SVG files

use std::process::ExitCode;

use svgicons::cli;

fn main() -> ExitCode {
    cli::run()
}
