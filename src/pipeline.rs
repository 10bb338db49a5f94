//! Message processing pipeline
//!
//! Orchestrates one run of the tool by coordinating the MessageReader (for
//! input), the TransactionStore (for parsing and aggregation) and the report
//! writers (for output).
//!
//! # Error Handling
//!
//! Fatal errors (input file not found, output write failures) are returned.
//! Unreadable lines and blank messages are logged and skipped; processing
//! continues with the next line.

use crate::cli::{CliArgs, OutputFormat};
use crate::core::{MpesaParser, ParserConfig, TransactionStore};
use crate::io::{
    write_records_csv, write_records_list, write_summary, MessageReader, SAMPLE_MESSAGES,
};
use crate::types::PesaError;
use std::io::Write;
use std::path::Path;

/// One configured run: parse messages, then render them
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: ParserConfig,
    format: OutputFormat,
}

impl Pipeline {
    pub fn new(config: ParserConfig, format: OutputFormat) -> Self {
        Pipeline { config, format }
    }

    /// Build a pipeline from parsed CLI arguments
    pub fn from_args(args: &CliArgs) -> Self {
        Self::new(args.to_parser_config(), args.format)
    }

    /// Process messages and write the selected output
    ///
    /// # Arguments
    ///
    /// * `input` - Message file (one message per line), or `None` for the built-in samples
    /// * `output` - Writer receiving the report or CSV
    ///
    /// # Returns
    ///
    /// * `Ok(TransactionStore)` - The filled store, for further inspection
    /// * `Err(PesaError)` - If the input cannot be opened or output cannot be written
    ///
    /// # Examples
    ///
    /// ```
    /// use pesa_flow::cli::OutputFormat;
    /// use pesa_flow::core::ParserConfig;
    /// use pesa_flow::pipeline::Pipeline;
    ///
    /// let pipeline = Pipeline::new(ParserConfig::default(), OutputFormat::Summary);
    /// let mut output: Vec<u8> = Vec::new();
    /// let store = pipeline.process(None, &mut output).unwrap();
    /// assert_eq!(store.count(), 8);
    /// ```
    pub fn process(
        &self,
        input: Option<&Path>,
        output: &mut dyn Write,
    ) -> Result<TransactionStore, PesaError> {
        let mut store = TransactionStore::with_parser(MpesaParser::new(self.config.clone()));

        match input {
            Some(path) => {
                let reader = MessageReader::new(path)?;
                for (index, message) in reader.enumerate() {
                    let line = index + 1;
                    match message {
                        Ok(text) => {
                            if let Err(e) = store.add_from_message(&text) {
                                tracing::warn!(line, error = %e, "skipping message");
                            }
                        }
                        Err(e) => tracing::warn!(line, error = %e, "failed to read message"),
                    }
                }
            }
            None => {
                tracing::info!("no input file given, using built-in sample messages");
                store.extend_from_messages(SAMPLE_MESSAGES);
            }
        }

        tracing::info!(records = store.count(), "messages processed");

        match self.format {
            OutputFormat::Summary => {
                write_summary(&store.summary(), &self.config.currency_marker, output)?
            }
            OutputFormat::Csv => write_records_csv(store.records(), output)?,
            OutputFormat::Records => write_records_list(store.records(), output)?,
        }

        Ok(store)
    }
}
