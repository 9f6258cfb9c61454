//! Data models for parsed directive configuration

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Theme variables keyed by name (without the leading `--`).
pub type ThemeMap = IndexMap<String, String>;

/// Typed options for a single plugin, keyed by option name.
pub type PluginOptionMap = IndexMap<String, OptionValue>;

/// A plugin option value, coerced once at parse time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl OptionValue {
    /// Coerce a raw option string.
    ///
    /// First match wins: all digits -> integer, digits-dot-digits -> float,
    /// `true`/`false` -> boolean, anything else stays a string.
    pub fn coerce(raw: &str) -> Self {
        if is_digits(raw) {
            if let Ok(n) = raw.parse::<i64>() {
                return OptionValue::Integer(n);
            }
        } else if let Some((int, frac)) = raw.split_once('.') {
            if is_digits(int) && is_digits(frac) {
                if let Ok(f) = raw.parse::<f64>() {
                    return OptionValue::Float(f);
                }
            }
        }

        match raw {
            "true" => OptionValue::Boolean(true),
            "false" => OptionValue::Boolean(false),
            _ => OptionValue::String(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Boolean(b) => write!(f, "{}", b),
            OptionValue::Integer(n) => write!(f, "{}", n),
            OptionValue::Float(x) => write!(f, "{}", x),
            OptionValue::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<OptionValue> for serde_json::Value {
    fn from(value: OptionValue) -> Self {
        match value {
            OptionValue::Boolean(b) => serde_json::Value::Bool(b),
            OptionValue::Integer(n) => serde_json::Value::from(n),
            OptionValue::Float(x) => serde_json::Value::from(x),
            OptionValue::String(s) => serde_json::Value::String(s),
        }
    }
}

/// Configuration extracted from the directives of one source text.
///
/// Every field is `None` until a directive contributes to it, so an absent
/// field and an empty one stay distinguishable through merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfig {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub theme: Option<ThemeMap>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source_not: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub safelist: Option<Vec<String>>,
    /// Never produced by a directive; set by callers that build a
    /// `ParsedConfig` themselves.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub blocklist: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub plugins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub disabled_plugins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub plugin_options: Option<IndexMap<String, PluginOptionMap>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub presets: Option<Vec<String>>,
}

impl ParsedConfig {
    /// True when no directive contributed anything.
    pub fn is_empty(&self) -> bool {
        *self == ParsedConfig::default()
    }
}

/// Append to a lazily created list field.
pub(crate) fn push_entry(field: &mut Option<Vec<String>>, value: impl Into<String>) {
    field.get_or_insert_with(Vec::new).push(value.into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_integer() {
        assert_eq!(OptionValue::coerce("42"), OptionValue::Integer(42));
        assert_eq!(OptionValue::coerce("007"), OptionValue::Integer(7));
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(OptionValue::coerce("1.25"), OptionValue::Float(1.25));
    }

    #[test]
    fn test_coerce_partial_numbers_stay_strings() {
        assert_eq!(OptionValue::coerce("1."), OptionValue::String("1.".to_string()));
        assert_eq!(OptionValue::coerce(".5"), OptionValue::String(".5".to_string()));
        assert_eq!(OptionValue::coerce("-3"), OptionValue::String("-3".to_string()));
        assert_eq!(OptionValue::coerce("1.2.3"), OptionValue::String("1.2.3".to_string()));
    }

    #[test]
    fn test_coerce_integer_overflow_is_string() {
        let raw = "99999999999999999999999";
        assert_eq!(OptionValue::coerce(raw), OptionValue::String(raw.to_string()));
    }

    #[test]
    fn test_coerce_boolean_is_case_sensitive() {
        assert_eq!(OptionValue::coerce("true"), OptionValue::Boolean(true));
        assert_eq!(OptionValue::coerce("false"), OptionValue::Boolean(false));
        assert_eq!(OptionValue::coerce("True"), OptionValue::String("True".to_string()));
    }

    #[test]
    fn test_coerce_empty_is_string() {
        assert_eq!(OptionValue::coerce(""), OptionValue::String(String::new()));
    }

    #[test]
    fn test_empty_config_serializes_to_empty_object() {
        let json = serde_json::to_string(&ParsedConfig::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_camel_case_field_names() {
        let config = ParsedConfig {
            source_not: Some(vec!["./dist/**".to_string()]),
            disabled_plugins: Some(vec!["forms".to_string()]),
            ..Default::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["sourceNot"][0], "./dist/**");
        assert_eq!(json["disabledPlugins"][0], "forms");
        assert!(json.get("theme").is_none());
    }

    #[test]
    fn test_option_values_serialize_as_scalars() {
        let mut options = PluginOptionMap::new();
        options.insert("scale".to_string(), OptionValue::Float(1.25));
        options.insert("enabled".to_string(), OptionValue::Boolean(true));
        options.insert("depth".to_string(), OptionValue::Integer(3));
        options.insert("mode".to_string(), OptionValue::String("dark".to_string()));
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json, serde_json::json!({"scale": 1.25, "enabled": true, "depth": 3, "mode": "dark"}));
    }

    #[test]
    fn test_deserialize_from_camel_case() {
        let config: ParsedConfig = serde_json::from_str(
            r#"{"blocklist": ["legacy"], "pluginOptions": {"forms": {"strategy": "class"}}}"#,
        )
        .unwrap();
        assert_eq!(config.blocklist, Some(vec!["legacy".to_string()]));
        let forms = &config.plugin_options.unwrap()["forms"];
        assert_eq!(forms["strategy"], OptionValue::String("class".to_string()));
    }

    #[test]
    fn test_push_entry_creates_field_lazily() {
        let mut field = None;
        push_entry(&mut field, "a");
        push_entry(&mut field, "b");
        assert_eq!(field, Some(vec!["a".to_string(), "b".to_string()]));
    }
}
