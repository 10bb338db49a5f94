//! PesaFlow CLI
//!
//! Command-line interface for extracting transactions from mobile-money
//! notification messages and reporting on them.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                  # summary of the built-in samples
//! cargo run -- inbox.txt                     # summary of a message file
//! cargo run -- --format csv inbox.txt > transactions.csv
//! cargo run -- --format records --log-level debug inbox.txt
//! ```
//!
//! The input file holds one message per line. Blank lines are reported on
//! stderr and skipped.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, file not readable, output not writable)

use pesa_flow::cli;
use pesa_flow::pipeline::Pipeline;
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::setup_logging(&args.log_level);

    let pipeline = Pipeline::from_args(&args);

    let mut output = std::io::stdout().lock();
    if let Err(e) = pipeline.process(args.input_file.as_deref(), &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
