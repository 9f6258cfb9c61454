//! Stylecfg - build configuration directives embedded in CSS
//!
//! This library provides functionality to:
//! - Parse `@config` directives (theme variables, content sources, plugins,
//!   presets) out of stylesheet text
//! - Validate directive syntax with advisory diagnostics
//! - Merge the parsed directives into a host configuration object
//! - Generate an example stylesheet using every directive
//!
//! ```
//! use serde_json::json;
//! use stylecfg::{merge, parse, validate};
//!
//! let css = r#"
//! @config theme { --color-primary: #3b82f6; }
//! @config source "./src/**/*.tsx";
//! @config plugin typography scale:1.25;
//! "#;
//!
//! assert!(validate(css).valid);
//! let parsed = parse(css);
//! let merged = merge(&serde_json::Map::new(), &parsed);
//! assert_eq!(merged["theme"], json!({"color-primary": "#3b82f6"}));
//! assert_eq!(merged["pluginOptions"], json!({"typography": {"scale": 1.25}}));
//! ```

pub mod block;
pub mod cli;
pub mod config;
pub mod directive;
pub mod logging;
pub mod merge;
pub mod models;
pub mod parser;
pub mod template;
pub mod validate;

pub use directive::extract_directives;
pub use merge::merge;
pub use models::{OptionValue, ParsedConfig};
pub use parser::{parse, DirectiveParser};
pub use template::generate_template;
pub use validate::{validate, ValidationResult};
