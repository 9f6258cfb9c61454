//! Parse and directive listing commands

use std::path::Path;
use std::process::ExitCode;

use crate::config::{read_source, CliOverrides};

use super::{open_session, to_json, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the parse command
pub fn run_parse(
    input: &Path,
    pretty: bool,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> ExitCode {
    let session = match open_session(config_path, overrides) {
        Ok(session) => session,
        Err(code) => return code,
    };

    let parsed = session.parser.parse(&read_source(input));

    match to_json(&parsed, pretty) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: Failed to serialize parse result: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the directives command
pub fn run_directives(input: &Path, config_path: Option<&Path>, overrides: &CliOverrides) -> ExitCode {
    let session = match open_session(config_path, overrides) {
        Ok(session) => session,
        Err(code) => return code,
    };

    for directive in session.parser.extract_directives(&read_source(input)) {
        println!("{}", directive);
    }

    ExitCode::from(EXIT_SUCCESS)
}
