//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod inspect;
mod merge;
mod template;
mod validate;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{
    find_config, load_config, merge_cli_overrides, project_root, resolve_path, CliOverrides,
    ConfigError, StylecfgConfig,
};
use crate::logging::{init_logging, LoggingConfig};
use crate::parser::DirectiveParser;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Stylecfg - Read build configuration directives embedded in CSS
#[derive(Parser)]
#[command(name = "stylecfg")]
#[command(about = "Stylecfg - Read build configuration directives embedded in CSS")]
#[command(version)]
pub struct Cli {
    /// Path to stylecfg.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directive marker keyword (overrides stylecfg.toml)
    #[arg(long, global = true)]
    pub marker: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check brace balance and malformed directives
    Validate {
        /// Stylesheet to check
        input: PathBuf,

        /// Strict mode: exit with an error when validation fails
        #[arg(long)]
        strict: bool,
    },

    /// Print the configuration parsed from the directives as JSON
    Parse {
        /// Stylesheet to parse
        input: PathBuf,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Merge the parsed directives into a host configuration and print it as JSON
    ///
    /// Examples:
    ///   stylecfg merge app.css --host tailwind.config.json
    ///   stylecfg merge app.css --host host.toml --pretty
    Merge {
        /// Stylesheet to parse
        input: PathBuf,

        /// Host configuration file (.json, .json5 or .toml)
        #[arg(long)]
        host: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List every directive line in source order
    Directives {
        /// Stylesheet to scan
        input: PathBuf,
    },

    /// Write an example stylesheet using every directive
    Template {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Resolved settings shared by all commands.
pub(crate) struct Session {
    pub config: StylecfgConfig,
    pub parser: DirectiveParser,
}

impl Session {
    /// Load stylecfg.toml (explicit or discovered) and apply CLI overrides.
    ///
    /// A host path from the config file is resolved against the project
    /// root; a host path from the command line is used as given.
    pub fn open(config_path: Option<&Path>, overrides: &CliOverrides) -> Result<Self, ConfigError> {
        let config_path = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => find_config(),
        };

        let mut config = match &config_path {
            Some(path) => load_config(Some(path))?,
            None => StylecfgConfig::default(),
        };

        if let (Some(root), Some(host)) =
            (config_path.as_deref().and_then(project_root), config.project.host.as_deref())
        {
            config.project.host = Some(resolve_path(root, host));
        }

        merge_cli_overrides(&mut config, overrides);
        let parser = config.directive_parser()?;

        Ok(Self { config, parser })
    }
}

/// Open a session or report the failure.
pub(crate) fn open_session(
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<Session, ExitCode> {
    Session::open(config_path, overrides).map_err(|e| {
        eprintln!("Error: {}", e);
        match e {
            ConfigError::Syntax(_) => ExitCode::from(EXIT_INVALID_ARGS),
            _ => ExitCode::from(EXIT_ERROR),
        }
    })
}

/// Serialize a value as JSON for stdout.
pub(crate) fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    init_logging(if cli.verbose { LoggingConfig::verbose() } else { LoggingConfig::default() });

    let config_path = cli.config.as_deref();
    let mut overrides = CliOverrides { marker: cli.marker.clone(), ..Default::default() };

    match cli.command {
        Commands::Validate { input, strict } => {
            if strict {
                overrides.strict = Some(true);
            }
            validate::run_validate(&input, config_path, &overrides)
        }
        Commands::Parse { input, pretty } => inspect::run_parse(&input, pretty, config_path, &overrides),
        Commands::Merge { input, host, pretty } => {
            overrides.host = host;
            merge::run_merge(&input, pretty, config_path, &overrides)
        }
        Commands::Directives { input } => inspect::run_directives(&input, config_path, &overrides),
        Commands::Template { output } => {
            template::run_template(output.as_deref(), config_path, &overrides)
        }
    }
}
