//! Configuration schema types for `icons.toml`
//!
//! Defines the structure and validation rules for svgicons configuration.

use crate::naming::NamingPolicy;
use crate::render::OutputFormat;
use crate::svg::SizeDefaults;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input and output locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Directory containing the SVG sources
    #[serde(default = "default_src")]
    pub src: PathBuf,
    /// Directory receiving the generated module
    #[serde(default = "default_out")]
    pub out: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { src: default_src(), out: default_out() }
    }
}

fn default_src() -> PathBuf {
    PathBuf::from("icons")
}

fn default_out() -> PathBuf {
    PathBuf::from("src/components")
}

/// Generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Width used when an icon has none
    #[serde(default = "default_size")]
    pub default_width: String,
    /// Height used when an icon has none
    #[serde(default = "default_size")]
    pub default_height: String,
    /// Output syntax
    #[serde(default)]
    pub format: OutputFormat,
    /// Artifact file name (defaults to `icons.<ext>`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file_name: Option<String>,
    /// Suffix appended to every component name
    #[serde(default)]
    pub identifier_suffix: String,
    /// Name untitled icons after their file instead of `Icon<N>`
    #[serde(default)]
    pub use_file_names: bool,
    /// Glob patterns of file names to leave out
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Fail the run when any icon fails
    #[serde(default)]
    pub strict: bool,
}

fn default_size() -> String {
    "24px".to_string()
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            default_width: default_size(),
            default_height: default_size(),
            format: OutputFormat::default(),
            output_file_name: None,
            identifier_suffix: String::new(),
            use_file_names: false,
            exclude: Vec::new(),
            strict: false,
        }
    }
}

/// Complete icons.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IconsConfig {
    /// Input and output locations
    #[serde(default)]
    pub project: ProjectConfig,
    /// Generation settings
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "generate.identifier_suffix")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "icons.toml: '{}' {}", self.field, self.message)
    }
}

impl IconsConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();
        let generate = &self.generate;

        if generate.default_width.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "generate.default_width".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if generate.default_height.trim().is_empty() {
            errors.push(ConfigValidationError {
                field: "generate.default_height".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        }

        if !generate.identifier_suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
            errors.push(ConfigValidationError {
                field: "generate.identifier_suffix".to_string(),
                message: "may only contain ASCII letters and digits".to_string(),
            });
        }

        if let Some(name) = &generate.output_file_name {
            if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
                errors.push(ConfigValidationError {
                    field: "generate.output_file_name".to_string(),
                    message: "must be a plain file name".to_string(),
                });
            }
        }

        for (i, pattern) in generate.exclude.iter().enumerate() {
            if let Err(e) = glob::Pattern::new(pattern) {
                errors.push(ConfigValidationError {
                    field: format!("generate.exclude[{}]", i),
                    message: format!("is not a valid glob pattern: {}", e),
                });
            }
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Effective artifact file name (explicit or `icons.<ext>`)
    pub fn output_file_name(&self) -> String {
        self.generate
            .output_file_name
            .clone()
            .unwrap_or_else(|| self.generate.format.default_file_name())
    }

    /// Size defaults for the attribute extractor
    pub fn size_defaults(&self) -> SizeDefaults {
        SizeDefaults {
            width: self.generate.default_width.clone(),
            height: self.generate.default_height.clone(),
        }
    }

    /// Naming policy for the identifier synthesizer
    pub fn naming_policy(&self) -> NamingPolicy {
        NamingPolicy {
            suffix: self.generate.identifier_suffix.clone(),
            use_file_names: self.generate.use_file_names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: IconsConfig = toml::from_str("").unwrap();
        assert_eq!(config.project.src, PathBuf::from("icons"));
        assert_eq!(config.project.out, PathBuf::from("src/components"));
        assert_eq!(config.generate.default_width, "24px");
        assert_eq!(config.generate.default_height, "24px");
        assert_eq!(config.generate.format, OutputFormat::Jsx);
        assert_eq!(config.output_file_name(), "icons.jsx");
        assert!(config.is_valid());
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[project]
src = "assets/svg"
out = "web/icons"

[generate]
default_width = "32px"
default_height = "32px"
format = "tsx"
output_file_name = "index.tsx"
identifier_suffix = "Icon"
use_file_names = true
exclude = ["*-old.svg", "draft_*"]
strict = true
"#;
        let config: IconsConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.project.src, PathBuf::from("assets/svg"));
        assert_eq!(config.project.out, PathBuf::from("web/icons"));
        assert_eq!(config.generate.format, OutputFormat::Tsx);
        assert_eq!(config.output_file_name(), "index.tsx");
        assert_eq!(config.generate.exclude.len(), 2);
        assert!(config.generate.strict);

        let policy = config.naming_policy();
        assert_eq!(policy.suffix, "Icon");
        assert!(policy.use_file_names);

        let sizes = config.size_defaults();
        assert_eq!(sizes.width, "32px");
        assert_eq!(sizes.height, "32px");
    }

    #[test]
    fn test_format_drives_default_file_name() {
        let config: IconsConfig = toml::from_str("[generate]\nformat = \"tsx\"").unwrap();
        assert_eq!(config.output_file_name(), "icons.tsx");
    }

    #[test]
    fn test_unknown_format_rejected() {
        let result: Result<IconsConfig, _> = toml::from_str("[generate]\nformat = \"vue\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_bad_suffix() {
        let config: IconsConfig =
            toml::from_str("[generate]\nidentifier_suffix = \"-icon\"").unwrap();
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "generate.identifier_suffix"));
    }

    #[test]
    fn test_validation_empty_sizes() {
        let config: IconsConfig =
            toml::from_str("[generate]\ndefault_width = \"\"\ndefault_height = \" \"").unwrap();
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_validation_output_file_name_with_path() {
        let config: IconsConfig =
            toml::from_str("[generate]\noutput_file_name = \"nested/icons.jsx\"").unwrap();
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "generate.output_file_name"));
    }

    #[test]
    fn test_validation_bad_glob() {
        let config: IconsConfig = toml::from_str("[generate]\nexclude = [\"[\"]").unwrap();
        let errors = config.validate();
        assert!(errors.iter().any(|e| e.field == "generate.exclude[0]"));
        assert!(errors[0].to_string().starts_with("icons.toml:"));
    }
}
