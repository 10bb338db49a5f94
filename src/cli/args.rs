use crate::core::config::{
    ParserConfig, DEFAULT_BALANCE_MARKER, DEFAULT_CURRENCY_MARKER, DEFAULT_THOUSANDS_SEPARATOR,
};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Extract and analyse mobile-money transactions from notification messages
#[derive(Parser, Debug)]
#[command(name = "pesa-flow")]
#[command(about = "Extract and analyse mobile-money transactions from notification messages", long_about = None)]
pub struct CliArgs {
    /// Text file with one notification message per line
    #[arg(
        value_name = "INPUT",
        help = "Path to a file with one message per line (default: built-in samples)"
    )]
    pub input_file: Option<PathBuf>,

    /// Output format
    #[arg(
        long = "format",
        value_name = "FORMAT",
        default_value = "summary",
        help = "Output: 'summary' report, 'csv' export, or numbered 'records' listing"
    )]
    pub format: OutputFormat,

    /// Token preceding monetary amounts
    #[arg(
        long = "currency-marker",
        value_name = "MARKER",
        default_value = DEFAULT_CURRENCY_MARKER,
        help = "Token immediately preceding amounts"
    )]
    pub currency_marker: String,

    /// Character skipped inside amounts
    #[arg(
        long = "thousands-separator",
        value_name = "CHAR",
        default_value_t = DEFAULT_THOUSANDS_SEPARATOR,
        help = "Thousands separator skipped while reading amounts"
    )]
    pub thousands_separator: char,

    /// Marker that opens the balance section
    #[arg(
        long = "balance-marker",
        value_name = "MARKER",
        default_value = DEFAULT_BALANCE_MARKER,
        help = "Text that starts the balance section and ends the date/time"
    )]
    pub balance_marker: String,

    /// Log verbosity
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level or filter directive (overridden by RUST_LOG)"
    )]
    pub log_level: String,
}

/// Available output formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Summary,
    Csv,
    Records,
}

impl CliArgs {
    /// Create a ParserConfig from CLI arguments
    ///
    /// Invalid values fall back to the defaults; see [`ParserConfig::new`].
    pub fn to_parser_config(&self) -> ParserConfig {
        ParserConfig::new(
            &self.currency_marker,
            self.thousands_separator,
            &self.balance_marker,
        )
    }
}
