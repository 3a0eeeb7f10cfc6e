//! Generate command implementation

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};
use crate::build::{ConsoleProgress, GenerateContext, IconPipeline, JsonProgress, ProgressReporter};
use crate::config::{
    check, default_config, find_config, load_config, merge_cli_overrides, project_root,
    CliOverrides, ConfigError, IconsConfig,
};
use crate::fs::OsFileSystem;
use crate::render::OutputFormat;

/// Arguments of `svgicons generate`
pub struct GenerateArgs {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub suffix: Option<String>,
    pub format: Option<OutputFormat>,
    pub output_file: Option<String>,
    pub use_file_names: bool,
    pub exclude: Vec<String>,
    pub strict: bool,
    pub dry_run: bool,
    pub json: bool,
    pub verbose: bool,
}

/// Execute the generate command
pub fn run_generate(args: GenerateArgs) -> ExitCode {
    let cwd = std::env::current_dir().unwrap_or_default();

    let (mut config, root) = match resolve_config(args.config.as_deref(), &cwd, args.verbose) {
        Ok(found) => found,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::from(config_exit_code(&e));
        }
    };

    // Paths given on the command line are relative to the working directory
    let overrides = CliOverrides {
        src: args.input.map(|p| cwd.join(p)),
        out: args.output.map(|p| cwd.join(p)),
        width: args.width,
        height: args.height,
        suffix: args.suffix,
        format: args.format,
        output_file_name: args.output_file,
        use_file_names: args.use_file_names.then_some(true),
        exclude: args.exclude,
        strict: args.strict.then_some(true),
    };
    merge_cli_overrides(&mut config, &overrides);

    if let Err(e) = check(&config) {
        eprintln!("Error: {}", e);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let context = GenerateContext::new(config, root).with_verbose(args.verbose);
    let reporter: Box<dyn ProgressReporter> = if args.json {
        Box::new(JsonProgress::new())
    } else {
        Box::new(ConsoleProgress::new().with_verbose(context.is_verbose()))
    };

    let pipeline = IconPipeline::new(context.options()).with_dry_run(args.dry_run);
    let outcome =
        match pipeline.run(&context.src_dir(), &context.out_dir(), &OsFileSystem, reporter.as_ref())
        {
            Ok(outcome) => outcome,
            // Already reported as an Aborted event
            Err(_) => return ExitCode::from(EXIT_ERROR),
        };

    if args.dry_run {
        print!("{}", outcome.artifact);
    }

    if context.is_strict() && !outcome.report.is_success() {
        if !args.json {
            eprintln!("{}", outcome.report.summary());
        }
        return ExitCode::from(EXIT_ERROR);
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Load the explicit or discovered config and return it with its project root.
fn resolve_config(
    explicit: Option<&Path>,
    cwd: &Path,
    verbose: bool,
) -> Result<(IconsConfig, PathBuf), ConfigError> {
    let config_path = match explicit {
        Some(path) => Some(cwd.join(path)),
        None => find_config(),
    };

    match config_path {
        Some(path) => {
            if verbose {
                eprintln!("Using config: {}", path.display());
            }
            let config = load_config(Some(&path))?;
            let root = project_root(&path).map(Path::to_path_buf).unwrap_or_else(|| cwd.into());
            Ok((config, root))
        }
        None => {
            if verbose {
                eprintln!("No icons.toml found, using defaults");
            }
            Ok((default_config(), cwd.to_path_buf()))
        }
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::Parse(_) | ConfigError::Validation(_) => EXIT_INVALID_ARGS,
        _ => EXIT_ERROR,
    }
}
