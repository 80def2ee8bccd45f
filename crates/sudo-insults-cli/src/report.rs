//! Turning failures into console output and an exit code.

use std::error::Error;
use std::fmt::Write;

use clap::error::ErrorKind;
use sudo_insults::InsultsError;

use crate::cli;

/// Exit code for every failed run.
pub const EXIT_FAILURE: i32 = 1;

/// Text to print on stdout and the exit code for a failed run.
pub fn report_error(err: &(dyn Error + 'static), program: &str) -> (String, i32) {
    let mut out = String::new();
    match err.downcast_ref::<InsultsError>() {
        Some(insults_err) if insults_err.is_usage() => {
            out.push_str(&cli::usage(program));
            let _ = writeln!(out, "\nerror: {}", insults_err);
        }
        _ => {
            let _ = writeln!(out, "error: {}", err);
        }
    }
    (out, EXIT_FAILURE)
}

/// Same as [`report_error`] for argument parsing failures.
///
/// Returns `None` for `--help` and `--version`, which clap prints and exits
/// on by itself.
pub fn report_parse_error(err: &clap::Error, program: &str) -> Option<(String, i32)> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        kind => {
            let mut out = cli::usage(program);
            if kind != ErrorKind::MissingRequiredArgument {
                let _ = write!(out, "\n{}", err.render());
            }
            Some((out, EXIT_FAILURE))
        }
    }
}
