//! Validate command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::{read_source, CliOverrides};

use super::{open_session, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the validate command
pub fn run_validate(input: &Path, config_path: Option<&Path>, overrides: &CliOverrides) -> ExitCode {
    let session = match open_session(config_path, overrides) {
        Ok(session) => session,
        Err(code) => return code,
    };

    let text = read_source(input);
    let result = session.parser.validate(&text);

    if result.valid {
        println!("{}: valid", input.display());
        return ExitCode::from(EXIT_SUCCESS);
    }

    let level = if session.config.validate.strict { "error" } else { "warning" };
    for issue in &result.issues {
        match issue.line {
            Some(line) => eprintln!("{}:{}: {}: {}", input.display(), line, level, issue.message),
            None => eprintln!("{}: {}: {}", input.display(), level, issue.message),
        }
    }

    if session.config.validate.strict {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
