//! Advisory validation for stylecfg sources
//!
//! Checks overall brace balance and flags single-line directives that open a
//! block without closing it. Validation never blocks parsing; callers decide
//! whether an invalid result is a warning or a hard error.

use crate::directive::DirectiveSyntax;
use serde::Serialize;

/// Message reported when `{` and `}` counts differ.
pub const UNMATCHED_BRACES: &str = "Unmatched braces in CSS config";

/// Type of validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// Total `{` and `}` counts differ
    UnmatchedBraces,
    /// Directive line opens a block it doesn't close
    MalformedDirective,
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueType::UnmatchedBraces => write!(f, "unmatched_braces"),
            IssueType::MalformedDirective => write!(f, "malformed_directive"),
        }
    }
}

/// A validation issue found in the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Line number (1-indexed), when the issue belongs to one line
    pub line: Option<usize>,
    pub issue_type: IssueType,
    /// Human-readable message describing the issue
    pub message: String,
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    /// The same diagnostics as `errors`, with location and type.
    #[serde(skip)]
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            valid: issues.is_empty(),
            errors: issues.iter().map(|issue| issue.message.clone()).collect(),
            issues,
        }
    }
}

/// Validate text written with the default `@config` marker.
///
/// # Example
///
/// ```
/// use stylecfg::validate::validate;
///
/// assert!(validate("@config theme { --a: 1; }").valid);
///
/// let result = validate("@config theme { --a: 1;");
/// assert!(!result.valid);
/// assert!(result.errors[0].contains("Unmatched braces"));
/// ```
pub fn validate(text: &str) -> ValidationResult {
    validate_with(DirectiveSyntax::default_syntax(), text)
}

/// Validate text using an explicit syntax.
pub fn validate_with(syntax: &DirectiveSyntax, text: &str) -> ValidationResult {
    let mut issues = Vec::new();

    let opening = text.matches('{').count();
    let closing = text.matches('}').count();
    if opening != closing {
        issues.push(ValidationIssue {
            line: None,
            issue_type: IssueType::UnmatchedBraces,
            message: UNMATCHED_BRACES.to_string(),
        });
    }

    for m in syntax.line.find_iter(text) {
        let fragment = m.as_str();
        if fragment.contains('{') && !fragment.contains('}') {
            issues.push(ValidationIssue {
                line: Some(line_number(text, m.start())),
                issue_type: IssueType::MalformedDirective,
                message: format!("Malformed directive: {}", fragment),
            });
        }
    }

    if !issues.is_empty() {
        log::debug!("validation found {} issue(s)", issues.len());
    }

    ValidationResult::from_issues(issues)
}

/// 1-indexed line containing byte `offset`.
fn line_number(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
