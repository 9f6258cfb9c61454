//! Merge command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::config::{load_host_config, read_source, CliOverrides};
use crate::merge::{merge, ConfigObject};

use super::{open_session, to_json, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the merge command
///
/// Without a host file the directives are merged into an empty object.
pub fn run_merge(
    input: &Path,
    pretty: bool,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> ExitCode {
    let session = match open_session(config_path, overrides) {
        Ok(session) => session,
        Err(code) => return code,
    };

    let host = match session.config.project.host.as_deref() {
        Some(path) => match load_host_config(path) {
            Ok(host) => host,
            Err(e) => {
                eprintln!("Error: Cannot load host config '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
        },
        None => ConfigObject::new(),
    };

    let parsed = session.parser.parse(&read_source(input));
    let merged = merge(&host, &parsed);

    match to_json(&merged, pretty) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: Failed to serialize merged config: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
