//! Configuration module for stylecfg
//!
//! Provides types and parsing for `stylecfg.toml` project configuration,
//! plus loaders for host configuration files and stylesheet sources.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
