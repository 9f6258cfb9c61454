//! Configuration schema types for `stylecfg.toml`
//!
//! Defines the structure and validation rules for project configuration.

use crate::directive::{SyntaxError, DEFAULT_MARKER};
use crate::parser::DirectiveParser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Directive marker keyword
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Host configuration file (.json, .json5 or .toml), relative to the project root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<PathBuf>,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self { marker: default_marker(), host: None }
    }
}

/// Validation settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidateConfig {
    /// Treat validation errors as fatal
    #[serde(default)]
    pub strict: bool,
}

/// Complete stylecfg.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylecfgConfig {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub validate: ValidateConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "project.marker")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "stylecfg.toml: '{}' {}", self.field, self.message)
    }
}

impl StylecfgConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.project.marker.is_empty() {
            errors.push(ConfigValidationError {
                field: "project.marker".to_string(),
                message: "must be a non-empty string".to_string(),
            });
        } else if self.project.marker.chars().any(char::is_whitespace) {
            errors.push(ConfigValidationError {
                field: "project.marker".to_string(),
                message: "must not contain whitespace".to_string(),
            });
        }

        if let Some(host) = &self.project.host {
            if host.as_os_str().is_empty() {
                errors.push(ConfigValidationError {
                    field: "project.host".to_string(),
                    message: "must be a non-empty path".to_string(),
                });
            }
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Build a parser for the configured marker.
    pub fn directive_parser(&self) -> Result<DirectiveParser, SyntaxError> {
        DirectiveParser::new(&self.project.marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: StylecfgConfig = toml::from_str("").unwrap();
        assert_eq!(config, StylecfgConfig::default());
        assert_eq!(config.project.marker, "@config");
        assert!(config.project.host.is_none());
        assert!(!config.validate.strict);
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[project]
marker = "@tw"
host = "tailwind.config.json"

[validate]
strict = true
"#;
        let config: StylecfgConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.project.marker, "@tw");
        assert_eq!(config.project.host, Some(PathBuf::from("tailwind.config.json")));
        assert!(config.validate.strict);
        assert!(config.is_valid());
    }

    #[test]
    fn test_validation_empty_marker() {
        let config: StylecfgConfig = toml::from_str("[project]\nmarker = \"\"").unwrap();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "project.marker");
        assert!(errors[0].to_string().contains("non-empty"));
    }

    #[test]
    fn test_validation_marker_with_whitespace() {
        let config: StylecfgConfig = toml::from_str("[project]\nmarker = \"@my config\"").unwrap();
        assert!(!config.is_valid());
    }

    #[test]
    fn test_validation_empty_host() {
        let config: StylecfgConfig = toml::from_str("[project]\nhost = \"\"").unwrap();
        assert_eq!(config.validate()[0].field, "project.host");
    }

    #[test]
    fn test_directive_parser_uses_marker() {
        let config: StylecfgConfig = toml::from_str("[project]\nmarker = \"@tw\"").unwrap();
        let parser = config.directive_parser().unwrap();
        assert_eq!(parser.syntax().marker(), "@tw");
    }
}
