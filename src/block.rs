//! Custom property extraction from directive blocks
//!
//! Shared by `theme { ... }` blocks and preset extension blocks. Only
//! well-formed `--name: value;` declarations contribute; anything else in the
//! block is ignored.

use crate::models::ThemeMap;
use regex::Regex;
use std::sync::LazyLock;

/// `--name: value;` with the value confined to a single line.
static DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--([A-Za-z0-9-]+)[ \t]*:[ \t]*([^;\r\n]+);").expect("valid pattern"));

/// Parse `--name: value;` declarations from a block body.
///
/// Names are returned without the leading `--`. Values are trimmed. A later
/// declaration of the same name replaces the earlier one.
///
/// # Example
///
/// ```
/// use stylecfg::block::parse_block_values;
///
/// let values = parse_block_values("--color-primary: #3b82f6; --radius: 4px;");
/// assert_eq!(values["color-primary"], "#3b82f6");
/// assert_eq!(values["radius"], "4px");
/// ```
pub fn parse_block_values(block: &str) -> ThemeMap {
    let mut values = ThemeMap::new();
    for caps in DECLARATION.captures_iter(block) {
        let value = caps[2].trim();
        if value.is_empty() {
            continue;
        }
        values.insert(caps[1].to_string(), value.to_string());
    }
    values
}
