//! Configuration loading and discovery for `icons.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::IconsConfig;
use crate::render::OutputFormat;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the project configuration file
pub const CONFIG_FILE_NAME: &str = "icons.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse icons.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
    /// Refused to overwrite an existing file
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override source directory
    pub src: Option<PathBuf>,
    /// Override output directory
    pub out: Option<PathBuf>,
    /// Override default width
    pub width: Option<String>,
    /// Override default height
    pub height: Option<String>,
    /// Override identifier suffix
    pub suffix: Option<String>,
    /// Override output format
    pub format: Option<OutputFormat>,
    /// Override artifact file name
    pub output_file_name: Option<String>,
    /// Name untitled icons after their file
    pub use_file_names: Option<bool>,
    /// Extra exclude patterns (appended)
    pub exclude: Vec<String>,
    /// Fail the run when any icon fails
    pub strict: Option<bool>,
}

/// Find icons.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for icons.toml
/// 2. Check XDG_CONFIG_HOME/svgicons/icons.toml (or ~/.config/svgicons/icons.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find icons.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("svgicons").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find icons.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from an icons.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// default configuration.
pub fn load_config(path: Option<&Path>) -> Result<IconsConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(default_config()),
    }
}

fn load_config_file(path: &Path) -> Result<IconsConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: IconsConfig = toml::from_str(&contents)?;
    check(&config)?;
    Ok(config)
}

/// Run validation and convert failures into a [`ConfigError`].
pub fn check(config: &IconsConfig) -> Result<(), ConfigError> {
    let errors = config.validate();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()))
    }
}

/// Configuration used when no icons.toml is found.
pub fn default_config() -> IconsConfig {
    IconsConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values. Exclude patterns
/// from the command line are added to those from the file.
pub fn merge_cli_overrides(config: &mut IconsConfig, overrides: &CliOverrides) {
    if let Some(ref src) = overrides.src {
        config.project.src = src.clone();
    }
    if let Some(ref out) = overrides.out {
        config.project.out = out.clone();
    }
    if let Some(ref width) = overrides.width {
        config.generate.default_width = width.clone();
    }
    if let Some(ref height) = overrides.height {
        config.generate.default_height = height.clone();
    }
    if let Some(ref suffix) = overrides.suffix {
        config.generate.identifier_suffix = suffix.clone();
    }
    if let Some(format) = overrides.format {
        config.generate.format = format;
    }
    if let Some(ref name) = overrides.output_file_name {
        config.generate.output_file_name = Some(name.clone());
    }
    if let Some(use_file_names) = overrides.use_file_names {
        config.generate.use_file_names = use_file_names;
    }
    config.generate.exclude.extend(overrides.exclude.iter().cloned());
    if let Some(strict) = overrides.strict {
        config.generate.strict = strict;
    }
}

/// Get the project root directory from a config file path.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent()
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

/// Starter icons.toml written by `svgicons init`
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# svgicons configuration

[project]
# Directory containing the .svg sources
src = "icons"
# Directory receiving the generated module
out = "src/components"

[generate]
default_width = "24px"
default_height = "24px"
# "jsx" or "tsx"
format = "jsx"
# output_file_name = "icons.jsx"
identifier_suffix = ""
use_file_names = false
exclude = []
strict = false
"#;

/// Write the starter configuration into `dir`.
///
/// Returns the path written. An existing file is only replaced when `force`
/// is set.
pub fn write_default_config(dir: &Path, force: bool) -> Result<PathBuf, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists(path));
    }
    fs::create_dir_all(dir)?;
    fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
    Ok(path)
}
