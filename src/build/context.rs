//! Generation context containing configuration and state for a run.

use crate::config::IconsConfig;
use crate::naming::NamingPolicy;
use crate::render::OutputFormat;
use crate::svg::SizeDefaults;
use std::path::{Path, PathBuf};

/// Settings that shape the generated artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Sizes for icons without `width`/`height`
    pub sizes: SizeDefaults,
    /// Identifier suffix and file-name fallback
    pub naming: NamingPolicy,
    /// Output syntax
    pub format: OutputFormat,
    /// Artifact file name
    pub output_file_name: String,
    /// Glob patterns of file names to leave out
    pub exclude: Vec<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::from_config(&IconsConfig::default())
    }
}

impl GenerateOptions {
    /// Derive options from a loaded configuration.
    pub fn from_config(config: &IconsConfig) -> Self {
        Self {
            sizes: config.size_defaults(),
            naming: config.naming_policy(),
            format: config.generate.format,
            output_file_name: config.output_file_name(),
            exclude: config.generate.exclude.clone(),
        }
    }
}

/// Generation context containing configuration and paths for a run.
#[derive(Debug, Clone)]
pub struct GenerateContext {
    config: IconsConfig,
    project_root: PathBuf,
    strict: bool,
    verbose: bool,
}

impl GenerateContext {
    /// Create a new context.
    ///
    /// # Arguments
    /// - `config` - The loaded configuration
    /// - `project_root` - Directory relative paths are resolved against
    pub fn new(config: IconsConfig, project_root: PathBuf) -> Self {
        let strict = config.generate.strict;
        Self { config, project_root, strict, verbose: false }
    }

    /// Get the configuration.
    pub fn config(&self) -> &IconsConfig {
        &self.config
    }

    /// Get the project root directory.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Input directory, resolved against the project root.
    pub fn src_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.project.src)
    }

    /// Output directory, resolved against the project root.
    pub fn out_dir(&self) -> PathBuf {
        self.resolve_path(&self.config.project.out)
    }

    /// Full path of the artifact.
    pub fn output_path(&self) -> PathBuf {
        self.out_dir().join(self.config.output_file_name())
    }

    /// Options for the pipeline.
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions::from_config(&self.config)
    }

    /// Whether a failed icon fails the run.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Whether verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Set strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Set verbose mode.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        crate::config::resolve_path(&self.project_root, path)
    }
}
