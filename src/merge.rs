//! Merging parsed directives into a host configuration
//!
//! The host configuration is an arbitrary JSON object supplied by the
//! integrating build tool. [`merge`] recomputes the directive-driven keys
//! (`theme`, `content`, `safelist`, `blocklist`, `pluginOptions`, `presets`)
//! and copies every other key through untouched. Neither input is modified.
//!
//! | Parsed field | Host key | Rule |
//! |---|---|---|
//! | `theme` | `theme` | host object overlaid, directive value wins |
//! | `source` / `sourceNot` | `content` | appended, exclusions prefixed with `!` |
//! | `safelist` | `safelist` | appended |
//! | `blocklist` | `blocklist` | appended |
//! | `pluginOptions` | `pluginOptions` | per-plugin replacement |
//! | `presets` | `presets` | replaced |
//!
//! A parsed field that is absent leaves the host key exactly as it was,
//! including its absence.

use crate::models::{ParsedConfig, PluginOptionMap};
use serde_json::{Map, Value};

/// A JSON object configuration (host input and merge output).
pub type ConfigObject = Map<String, Value>;

const THEME: &str = "theme";
const CONTENT: &str = "content";
const SAFELIST: &str = "safelist";
const BLOCKLIST: &str = "blocklist";
const PLUGIN_OPTIONS: &str = "pluginOptions";
const PRESETS: &str = "presets";

/// Combine a host configuration with parsed directives.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use stylecfg::merge::merge;
/// use stylecfg::parser::parse;
///
/// let parsed = parse("@config source \"./src/**/*.tsx\";\n@config source not \"./node_modules/**\";");
/// let host = json!({"content": "./index.html", "darkMode": "class"});
/// let merged = merge(host.as_object().unwrap(), &parsed);
///
/// assert_eq!(merged["content"], json!(["./index.html", "./src/**/*.tsx", "!./node_modules/**"]));
/// assert_eq!(merged["darkMode"], "class");
/// ```
pub fn merge(host: &ConfigObject, dsl: &ParsedConfig) -> ConfigObject {
    let mut merged = host.clone();

    if let Some(theme) = &dsl.theme {
        let mut base = object_or_empty(host.get(THEME));
        for (name, value) in theme {
            base.insert(name.clone(), Value::String(value.clone()));
        }
        merged.insert(THEME.to_string(), Value::Object(base));
    }

    if dsl.source.is_some() || dsl.source_not.is_some() {
        let mut content = list_or_empty(host.get(CONTENT));
        content.extend(dsl.source.iter().flatten().map(|glob| Value::String(glob.clone())));
        content.extend(dsl.source_not.iter().flatten().map(|glob| Value::String(format!("!{}", glob))));
        merged.insert(CONTENT.to_string(), Value::Array(content));
    }

    append_list(&mut merged, host, SAFELIST, dsl.safelist.as_deref());
    append_list(&mut merged, host, BLOCKLIST, dsl.blocklist.as_deref());

    if let Some(plugin_options) = &dsl.plugin_options {
        let mut base = object_or_empty(host.get(PLUGIN_OPTIONS));
        for (plugin, options) in plugin_options {
            base.insert(plugin.clone(), options_to_value(options));
        }
        merged.insert(PLUGIN_OPTIONS.to_string(), Value::Object(base));
    }

    if let Some(presets) = &dsl.presets {
        let presets = presets.iter().map(|name| Value::String(name.clone())).collect();
        merged.insert(PRESETS.to_string(), Value::Array(presets));
    }

    merged
}

fn append_list(merged: &mut ConfigObject, host: &ConfigObject, key: &str, entries: Option<&[String]>) {
    let Some(entries) = entries else {
        return;
    };
    let mut list = list_or_empty(host.get(key));
    list.extend(entries.iter().map(|entry| Value::String(entry.clone())));
    merged.insert(key.to_string(), Value::Array(list));
}

/// Host value as a list: absent or null is empty, an array is kept, any
/// other value becomes a single element.
fn list_or_empty(value: Option<&Value>) -> Vec<Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => vec![other.clone()],
    }
}

fn object_or_empty(value: Option<&Value>) -> ConfigObject {
    match value {
        Some(Value::Object(map)) => map.clone(),
        _ => ConfigObject::new(),
    }
}

fn options_to_value(options: &PluginOptionMap) -> Value {
    let map = options.iter().map(|(key, value)| (key.clone(), Value::from(value.clone()))).collect();
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OptionValue;
    use serde_json::json;

    fn object(value: Value) -> ConfigObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn strings(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_empty_dsl_is_identity() {
        let host = object(json!({
            "content": "./index.html",
            "theme": {"extend": {"colors": {}}},
            "safelist": null,
            "plugins": ["x"]
        }));
        assert_eq!(merge(&host, &ParsedConfig::default()), host);
    }

    #[test]
    fn test_empty_host_and_dsl() {
        assert!(merge(&ConfigObject::new(), &ParsedConfig::default()).is_empty());
    }

    #[test]
    fn test_theme_overlay() {
        let host = object(json!({"theme": {"primary": "red", "spacing": {"1": "4px"}}}));
        let dsl = ParsedConfig {
            theme: Some([("primary".to_string(), "blue".to_string())].into_iter().collect()),
            ..Default::default()
        };
        let merged = merge(&host, &dsl);
        assert_eq!(merged["theme"], json!({"primary": "blue", "spacing": {"1": "4px"}}));
    }

    #[test]
    fn test_theme_replaces_non_object_host_theme() {
        let host = object(json!({"theme": "default"}));
        let dsl = ParsedConfig {
            theme: Some([("a".to_string(), "1".to_string())].into_iter().collect()),
            ..Default::default()
        };
        assert_eq!(merge(&host, &dsl)["theme"], json!({"a": "1"}));
    }

    #[test]
    fn test_content_from_string_host() {
        let host = object(json!({"content": "./index.html"}));
        let dsl = ParsedConfig { source: strings(&["./src/**"]), ..Default::default() };
        assert_eq!(merge(&host, &dsl)["content"], json!(["./index.html", "./src/**"]));
    }

    #[test]
    fn test_content_from_null_host() {
        let host = object(json!({"content": null}));
        let dsl = ParsedConfig { source_not: strings(&["./dist"]), ..Default::default() };
        assert_eq!(merge(&host, &dsl)["content"], json!(["!./dist"]));
    }

    #[test]
    fn test_content_sources_before_exclusions() {
        let dsl = ParsedConfig {
            source: strings(&["a", "b"]),
            source_not: strings(&["c"]),
            ..Default::default()
        };
        let merged = merge(&ConfigObject::new(), &dsl);
        assert_eq!(merged["content"], json!(["a", "b", "!c"]));
    }

    #[test]
    fn test_content_untouched_without_sources() {
        let host = object(json!({"content": "./index.html"}));
        let dsl = ParsedConfig { safelist: strings(&["btn"]), ..Default::default() };
        let merged = merge(&host, &dsl);
        assert_eq!(merged["content"], json!("./index.html"));
    }

    #[test]
    fn test_safelist_and_blocklist_independent() {
        let host = object(json!({"safelist": "keep", "blocklist": ["old"]}));
        let dsl = ParsedConfig { blocklist: strings(&["legacy"]), ..Default::default() };
        let merged = merge(&host, &dsl);
        assert_eq!(merged["safelist"], json!("keep"));
        assert_eq!(merged["blocklist"], json!(["old", "legacy"]));
    }

    #[test]
    fn test_safelist_appended_to_absent_host() {
        let dsl = ParsedConfig { safelist: strings(&["btn btn-primary"]), ..Default::default() };
        assert_eq!(merge(&ConfigObject::new(), &dsl)["safelist"], json!(["btn btn-primary"]));
    }

    #[test]
    fn test_plugin_options_replace_per_plugin() {
        let host = object(json!({"pluginOptions": {
            "forms": {"strategy": "base", "extra": 1},
            "aspect": {"legacy": true}
        }}));
        let mut forms = PluginOptionMap::new();
        forms.insert("strategy".to_string(), OptionValue::String("class".to_string()));
        let mut typography = PluginOptionMap::new();
        typography.insert("scale".to_string(), OptionValue::Float(1.25));
        let dsl = ParsedConfig {
            plugin_options: Some(
                [("forms".to_string(), forms), ("typography".to_string(), typography)].into_iter().collect(),
            ),
            ..Default::default()
        };
        let merged = merge(&host, &dsl);
        assert_eq!(
            merged["pluginOptions"],
            json!({
                "forms": {"strategy": "class"},
                "aspect": {"legacy": true},
                "typography": {"scale": 1.25}
            })
        );
    }

    #[test]
    fn test_presets_replace_host() {
        let host = object(json!({"presets": ["host-preset"]}));
        let dsl = ParsedConfig { presets: strings(&["material"]), ..Default::default() };
        assert_eq!(merge(&host, &dsl)["presets"], json!(["material"]));
    }

    #[test]
    fn test_unrelated_keys_pass_through_in_order() {
        let host = object(json!({"darkMode": "class", "prefix": "tw-", "important": true}));
        let dsl = ParsedConfig { presets: strings(&["x"]), ..Default::default() };
        let merged = merge(&host, &dsl);
        let keys: Vec<&str> = merged.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["darkMode", "prefix", "important", "presets"]);
    }

    #[test]
    fn test_inputs_not_mutated() {
        let host = object(json!({"content": ["a"]}));
        let dsl = ParsedConfig { source: strings(&["b"]), ..Default::default() };
        let before = dsl.clone();
        let _ = merge(&host, &dsl);
        assert_eq!(host, object(json!({"content": ["a"]})));
        assert_eq!(dsl, before);
    }
}
