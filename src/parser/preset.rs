//! `preset` directives: preset names and inline theme extensions

use crate::block::parse_block_values;
use crate::directive::DirectiveSyntax;
use crate::models::{push_entry, ParsedConfig, ThemeMap};
use regex::Regex;
use std::sync::LazyLock;

/// `name { ... }` as a whole directive body.
static EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_-]+)\s*\{([^}]*)\}$").expect("valid pattern"));

/// Collect preset names into `config.presets`.
///
/// Extension blocks write into `theme`, the accumulator shared with theme
/// blocks.
pub(crate) fn parse_presets(
    syntax: &DirectiveSyntax,
    text: &str,
    config: &mut ParsedConfig,
    theme: &mut ThemeMap,
) {
    for caps in syntax.preset.captures_iter(text) {
        let spec = caps[1].trim();

        if let Some(ext) = EXTENSION.captures(spec) {
            push_entry(&mut config.presets, &ext[1]);
            theme.extend(parse_block_values(&ext[2]));
            continue;
        }

        if spec.contains('{') {
            log::trace!("skipping preset directive '{}'", spec);
            continue;
        }

        for name in spec.split(',').map(str::trim).filter(|name| !name.is_empty()) {
            push_entry(&mut config.presets, name);
        }
    }
}
