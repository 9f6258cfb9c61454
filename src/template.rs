//! Example stylecfg source generation.
//!
//! Produces a stylesheet that uses every directive kind once, for
//! documentation and for `stylecfg template`. Blocks are kept on a single
//! line so the output passes [`crate::validate::validate`].
//!
//! # Example
//!
//! ```
//! use stylecfg::template::generate_template;
//! use stylecfg::validate::validate;
//!
//! let css = generate_template();
//! assert!(validate(&css).valid);
//! ```

use crate::directive::DEFAULT_MARKER;

/// Generate the example source with the default `@config` marker.
pub fn generate_template() -> String {
    generate_template_with_marker(DEFAULT_MARKER)
}

/// Generate the example source using a custom marker.
pub fn generate_template_with_marker(marker: &str) -> String {
    let mut sections = Vec::new();

    sections.push(format!(
        "/* Build configuration directives.\n * Lines starting with {} are read by stylecfg and ignored by browsers. */\n",
        marker
    ));

    sections.push(format!(
        "/* Theme variables */\n{m} theme {{ --color-primary: #3b82f6; --color-secondary: #64748b; --font-sans: Inter, system-ui, sans-serif; }}\n",
        m = marker
    ));

    sections.push(format!(
        r#"/* Content sources */
{m} source "./src/**/*.tsx";
{m} source './pages/**/*.html';
{m} source not "./node_modules/**";
{m} source inline("btn btn-primary");
"#,
        m = marker
    ));

    sections.push(format!(
        r#"/* Plugins */
{m} plugin forms;
{m} plugin typography scale:1.25 enabled:true;
{m} plugin no container-queries;
"#,
        m = marker
    ));

    sections.push(format!(
        r#"/* Presets */
{m} preset material, compact;
{m} preset brand {{ --color-accent: #f59e0b; }}
"#,
        m = marker
    ));

    sections.push(".btn-primary {\n  color: var(--color-primary);\n}\n".to_string());

    sections.join("\n")
}
