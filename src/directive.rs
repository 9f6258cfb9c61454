//! Directive syntax and extraction
//!
//! A directive is a statement starting with the marker keyword (`@config` by
//! default) followed by a directive keyword:
//!
//! ```text
//! @config theme { --color-primary: #3b82f6; }
//! @config source "./src/**/*.tsx";
//! @config plugin typography scale:1.25;
//! @config preset material;
//! ```
//!
//! [`DirectiveSyntax`] holds the compiled patterns for one marker. Each
//! directive parser scans the full text with its own pattern, so blocks that
//! span several lines are matched even though [`DirectiveSyntax::extract`]
//! only reports single lines.
//!
//! # Example
//!
//! ```
//! use stylecfg::directive::extract_directives;
//!
//! let css = "@config preset material;\n.btn { color: red; }\n@config plugin forms;";
//! assert_eq!(
//!     extract_directives(css),
//!     vec!["@config preset material;", "@config plugin forms;"]
//! );
//! ```

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Marker used when none is configured.
pub const DEFAULT_MARKER: &str = "@config";

/// Error building a [`DirectiveSyntax`] from a custom marker.
#[derive(Debug, Error)]
pub enum SyntaxError {
    #[error("directive marker must not be empty")]
    EmptyMarker,
    #[error("directive marker '{0}' must not contain whitespace")]
    WhitespaceInMarker(String),
    #[error("invalid directive pattern: {0}")]
    Pattern(#[from] regex::Error),
}

static DEFAULT_SYNTAX: LazyLock<DirectiveSyntax> = LazyLock::new(|| {
    DirectiveSyntax::new(DEFAULT_MARKER).expect("default directive marker compiles")
});

/// Compiled directive patterns for one marker keyword.
#[derive(Debug, Clone)]
pub struct DirectiveSyntax {
    marker: String,
    /// Marker plus the rest of its line.
    pub(crate) line: Regex,
    /// `theme { ... }`, group 1 is the block body (ends at the first `}`).
    pub(crate) theme: Regex,
    /// `source <spec>;`, group 1 is the spec.
    pub(crate) source: Regex,
    /// `plugin <spec>;`, group 1 is the spec.
    pub(crate) plugin: Regex,
    /// `preset <spec>` with an optional trailing block, group 1 is the spec.
    pub(crate) preset: Regex,
}

impl DirectiveSyntax {
    /// Compile the directive patterns for `marker`.
    ///
    /// The marker is matched literally.
    pub fn new(marker: &str) -> Result<Self, SyntaxError> {
        if marker.is_empty() {
            return Err(SyntaxError::EmptyMarker);
        }
        if marker.chars().any(char::is_whitespace) {
            return Err(SyntaxError::WhitespaceInMarker(marker.to_string()));
        }

        let m = regex::escape(marker);
        Ok(Self {
            marker: marker.to_string(),
            line: Regex::new(&format!(r"{m}[^\r\n]*"))?,
            theme: Regex::new(&format!(r"{m}\s+theme\s*\{{([^}}]*)\}}"))?,
            source: Regex::new(&format!(r"{m}\s+source\s+([^;]+);"))?,
            plugin: Regex::new(&format!(r"{m}\s+plugin\s+([^;]+);"))?,
            preset: Regex::new(&format!(r"{m}\s+preset\s+([^;{{}}\r\n]*(?:\{{[^}}]*\}})?)"))?,
        })
    }

    /// Shared syntax for [`DEFAULT_MARKER`].
    pub fn default_syntax() -> &'static DirectiveSyntax {
        &DEFAULT_SYNTAX
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Every single-line directive fragment, in source order.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.line.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}

/// Extract directive lines using the default marker.
pub fn extract_directives(text: &str) -> Vec<String> {
    DirectiveSyntax::default_syntax().extract(text)
}
