//! `source` directives: content globs, exclusions and inline safelist entries

use crate::directive::DirectiveSyntax;
use crate::models::{push_entry, ParsedConfig};
use regex::Regex;
use std::sync::LazyLock;

/// Quoted text inside `inline(...)`.
static INLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"inline\(\s*["']([^"']+)["']"#).expect("valid pattern"));

/// Classification of a single `source` directive body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SourceEntry {
    Include(String),
    Exclude(String),
    Inline(String),
}

/// Classify a directive body.
///
/// The `not ` prefix is checked before `inline(`, so `not inline("x")` is an
/// exclusion whose text still reads `inline("x")`.
pub(crate) fn classify_source(spec: &str) -> Option<SourceEntry> {
    if let Some(rest) = spec.strip_prefix("not ") {
        return Some(SourceEntry::Exclude(strip_quotes(rest).to_string()));
    }

    if spec.contains("inline(") {
        return INLINE.captures(spec).map(|caps| SourceEntry::Inline(caps[1].to_string()));
    }

    Some(SourceEntry::Include(strip_quotes(spec).to_string()))
}

/// Drop one leading and one trailing quote character, then trim.
fn strip_quotes(s: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';
    let s = s.trim();
    let s = s.strip_prefix(is_quote).unwrap_or(s);
    let s = s.strip_suffix(is_quote).unwrap_or(s);
    s.trim()
}

pub(crate) fn parse_sources(syntax: &DirectiveSyntax, text: &str, config: &mut ParsedConfig) {
    for caps in syntax.source.captures_iter(text) {
        match classify_source(&caps[1]) {
            Some(SourceEntry::Include(glob)) => push_entry(&mut config.source, glob),
            Some(SourceEntry::Exclude(glob)) => push_entry(&mut config.source_not, glob),
            Some(SourceEntry::Inline(classes)) => push_entry(&mut config.safelist, classes),
            None => log::trace!("skipping source directive '{}'", &caps[1]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_double_quoted_include() {
        assert_eq!(
            classify_source(r#""./src/**/*.tsx""#),
            Some(SourceEntry::Include("./src/**/*.tsx".to_string()))
        );
    }

    #[test]
    fn test_classify_single_quoted_and_bare() {
        assert_eq!(classify_source("'./a/*.html'"), Some(SourceEntry::Include("./a/*.html".to_string())));
        assert_eq!(classify_source("./b/*.vue"), Some(SourceEntry::Include("./b/*.vue".to_string())));
    }

    #[test]
    fn test_classify_exclude() {
        assert_eq!(
            classify_source(r#"not "./node_modules/**""#),
            Some(SourceEntry::Exclude("./node_modules/**".to_string()))
        );
        assert_eq!(classify_source("not ./dist"), Some(SourceEntry::Exclude("./dist".to_string())));
    }

    #[test]
    fn test_classify_inline() {
        assert_eq!(
            classify_source(r#"inline("btn btn-primary")"#),
            Some(SourceEntry::Inline("btn btn-primary".to_string()))
        );
        assert_eq!(classify_source("inline('card')"), Some(SourceEntry::Inline("card".to_string())));
    }

    #[test]
    fn test_classify_inline_without_quotes_contributes_nothing() {
        assert_eq!(classify_source("inline(card)"), None);
        assert_eq!(classify_source(r#"inline("")"#), None);
    }

    #[test]
    fn test_not_inline_is_an_exclusion() {
        assert_eq!(
            classify_source(r#"not inline("legacy")"#),
            Some(SourceEntry::Exclude(r#"inline("legacy")"#.to_string()))
        );
    }

    #[test]
    fn test_parse_sources_keeps_order() {
        let text = "@config source \"c\";\n@config source \"a\";\n@config source \"b\";";
        let mut config = ParsedConfig::default();
        parse_sources(DirectiveSyntax::default_syntax(), text, &mut config);
        assert_eq!(config.source, Some(vec!["c".to_string(), "a".to_string(), "b".to_string()]));
        assert!(config.source_not.is_none());
        assert!(config.safelist.is_none());
    }

    #[test]
    fn test_directive_without_semicolon_is_ignored() {
        let mut config = ParsedConfig::default();
        parse_sources(DirectiveSyntax::default_syntax(), "@config source \"a\"", &mut config);
        assert!(config.source.is_none());
    }
}
