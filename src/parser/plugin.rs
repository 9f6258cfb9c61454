//! `plugin` directives: enablement, disablement and typed options

use crate::directive::DirectiveSyntax;
use crate::models::{push_entry, OptionValue, ParsedConfig, PluginOptionMap};

pub(crate) fn parse_plugins(syntax: &DirectiveSyntax, text: &str, config: &mut ParsedConfig) {
    for caps in syntax.plugin.captures_iter(text) {
        let spec = caps[1].trim();
        if spec.is_empty() {
            continue;
        }

        if let Some(rest) = spec.strip_prefix("no ") {
            let name = rest.trim();
            if !name.is_empty() {
                push_entry(&mut config.disabled_plugins, name);
            }
            continue;
        }

        let (name, remainder) = match spec.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (spec, ""),
        };

        push_entry(&mut config.plugins, name);

        if !remainder.is_empty() {
            // A later options directive for the same plugin replaces the earlier one.
            config
                .plugin_options
                .get_or_insert_with(Default::default)
                .insert(name.to_string(), parse_plugin_options(remainder));
        }
    }
}

/// Parse whitespace-separated `key:value` tokens.
///
/// The key ends at the first `:`; the value keeps any later `:`. Trailing `;`
/// and every quote character are removed before coercion. Tokens without a
/// `:` are skipped.
pub fn parse_plugin_options(remainder: &str) -> PluginOptionMap {
    let mut options = PluginOptionMap::new();

    for token in remainder.split_whitespace() {
        let Some((key, raw)) = token.split_once(':') else {
            log::trace!("skipping plugin option token '{}'", token);
            continue;
        };
        if key.is_empty() {
            continue;
        }

        let value: String = raw.trim_end_matches(';').chars().filter(|c| *c != '"' && *c != '\'').collect();
        options.insert(key.to_string(), OptionValue::coerce(&value));
    }

    options
}
