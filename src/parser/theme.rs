//! `theme { ... }` directives

use crate::block::parse_block_values;
use crate::directive::DirectiveSyntax;
use crate::models::ThemeMap;

/// Fold every theme block in `text` into `theme`, last write wins per key.
pub(crate) fn parse_theme(syntax: &DirectiveSyntax, text: &str, theme: &mut ThemeMap) {
    for caps in syntax.theme.captures_iter(text) {
        let values = parse_block_values(&caps[1]);
        if values.is_empty() {
            log::trace!("skipping theme block with no declarations");
            continue;
        }
        theme.extend(values);
    }
}
