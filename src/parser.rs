//! Directive parsing for stylecfg sources
//!
//! Runs the theme, source, plugin and preset parsers over the same text and
//! assembles one [`ParsedConfig`]. Malformed directives never fail the parse;
//! they simply contribute nothing. Use [`crate::validate`] for diagnostics.

mod plugin;
mod preset;
mod source;
mod theme;

pub use plugin::parse_plugin_options;

use crate::directive::{DirectiveSyntax, SyntaxError};
use crate::models::{ParsedConfig, ThemeMap};
use crate::validate::{validate_with, ValidationResult};

/// Parse directives written with the default `@config` marker.
///
/// # Example
///
/// ```
/// use stylecfg::parser::parse;
///
/// let parsed = parse("@config source \"./src/**/*.tsx\";\n@config preset material;");
/// assert_eq!(parsed.source, Some(vec!["./src/**/*.tsx".to_string()]));
/// assert_eq!(parsed.presets, Some(vec!["material".to_string()]));
/// assert!(parsed.theme.is_none());
/// ```
pub fn parse(text: &str) -> ParsedConfig {
    parse_with(DirectiveSyntax::default_syntax(), text)
}

/// Parse directives using an explicit syntax.
pub fn parse_with(syntax: &DirectiveSyntax, text: &str) -> ParsedConfig {
    let mut config = ParsedConfig::default();
    let mut theme = ThemeMap::new();

    // Theme blocks first so preset extensions override them.
    theme::parse_theme(syntax, text, &mut theme);
    source::parse_sources(syntax, text, &mut config);
    plugin::parse_plugins(syntax, text, &mut config);
    preset::parse_presets(syntax, text, &mut config, &mut theme);

    if !theme.is_empty() {
        config.theme = Some(theme);
    }

    log::debug!(
        "parsed {} theme variables, {} sources, {} plugins, {} presets",
        config.theme.as_ref().map_or(0, |t| t.len()),
        config.source.as_ref().map_or(0, Vec::len) + config.source_not.as_ref().map_or(0, Vec::len),
        config.plugins.as_ref().map_or(0, Vec::len),
        config.presets.as_ref().map_or(0, Vec::len),
    );

    config
}

/// Parser bound to one directive marker.
#[derive(Debug, Clone)]
pub struct DirectiveParser {
    syntax: DirectiveSyntax,
}

impl Default for DirectiveParser {
    fn default() -> Self {
        Self { syntax: DirectiveSyntax::default_syntax().clone() }
    }
}

impl DirectiveParser {
    /// Create a parser for a custom marker such as `@tw`.
    pub fn new(marker: &str) -> Result<Self, SyntaxError> {
        Ok(Self { syntax: DirectiveSyntax::new(marker)? })
    }

    pub fn syntax(&self) -> &DirectiveSyntax {
        &self.syntax
    }

    pub fn parse(&self, text: &str) -> ParsedConfig {
        parse_with(&self.syntax, text)
    }

    pub fn validate(&self, text: &str) -> ValidationResult {
        validate_with(&self.syntax, text)
    }

    pub fn extract_directives(&self, text: &str) -> Vec<String> {
        self.syntax.extract(text)
    }
}
