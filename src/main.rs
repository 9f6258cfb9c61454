//! Stylecfg - Command-line tool for reading build configuration directives from CSS

use std::process::ExitCode;

use stylecfg::cli;

fn main() -> ExitCode {
    cli::run()
}
