//! Entry point for merge-icons, which combines several icon themes into one
//! theme made of symlinks, later themes taking priority.
//!
//! This binary loads environment variables, parses CLI arguments via [`cli`],
//! and dispatches to the appropriate subcommand handler.

mod cli;
mod config;
mod constants;
mod error;
mod logging;
mod merge;
mod output;
mod theme;

use std::process::ExitCode;

use error::MergeError;

/// Runs the merge-icons CLI.
///
/// Loads `.env` files (silently ignored if absent), parses command-line
/// arguments, and maps failures to exit codes: missing theme indexes get
/// their own status and a full listing on stderr.
fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = cli::parse();
    logging::init(cli.verbose);

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let merge_error = err.downcast_ref::<MergeError>();
            if let Some(MergeError::MissingThemeIndex { roots }) = merge_error {
                output::render_missing_themes(roots);
            } else {
                tracing::debug!(error = ?err, "run failed");
                output::render_error(&err);
            }
            ExitCode::from(merge_error.map_or(constants::EXIT_FAILURE, MergeError::exit_code))
        }
    }
}
