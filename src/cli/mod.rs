// CLI module
// Command-line interface and argument parsing

mod args;
mod logging;

pub use args::{CliArgs, OutputFormat};
pub use logging::setup_logging;

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments or --help), clap displays an error
/// message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
