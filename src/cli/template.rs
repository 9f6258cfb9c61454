//! Template command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::CliOverrides;
use crate::template::generate_template_with_marker;

use super::{open_session, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the template command
pub fn run_template(output: Option<&Path>, config_path: Option<&Path>, overrides: &CliOverrides) -> ExitCode {
    let session = match open_session(config_path, overrides) {
        Ok(session) => session,
        Err(code) => return code,
    };

    let content = generate_template_with_marker(session.parser.syntax().marker());

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &content) {
                eprintln!("Error: Failed to write '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            println!("Template written to: {}", path.display());
        }
        None => print!("{}", content),
    }

    ExitCode::from(EXIT_SUCCESS)
}
