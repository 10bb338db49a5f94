//! Line-oriented message reader with iterator interface
//!
//! Provides a streaming iterator over raw notification messages stored one
//! per line in a text file (e.g. an SMS export).
//!
//! # Iterator Interface
//!
//! MessageReader implements the Iterator trait, yielding
//! `Result<String, PesaError>` for each line:
//!
//! ```no_run
//! use pesa_flow::io::MessageReader;
//! use std::path::Path;
//!
//! let reader = MessageReader::new(Path::new("inbox.txt")).unwrap();
//! for message in reader {
//!     match message {
//!         Ok(text) => println!("{}", text),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, permission denied) are returned from `new()`
//! - Read errors on individual lines are yielded as Err variants with the line number
//! - Blank lines are yielded unchanged; rejecting them is the parser's job

use crate::types::PesaError;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Lines};
use std::path::Path;

/// Streaming reader over one-message-per-line files
#[derive(Debug)]
pub struct MessageReader {
    lines: Lines<BufReader<File>>,
    line_num: usize,
}

impl MessageReader {
    /// Open a message file for streaming iteration
    ///
    /// # Returns
    ///
    /// * `Ok(MessageReader)` if the file opened successfully
    /// * `Err(PesaError::FileNotFound)` if the path does not exist
    /// * `Err(PesaError::IoError)` for any other open failure
    pub fn new(path: &Path) -> Result<Self, PesaError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PesaError::file_not_found(&path.display().to_string()),
            _ => PesaError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self {
            lines: BufReader::with_capacity(8 * 1024, file).lines(),
            line_num: 0,
        })
    }

    /// Number of lines read so far
    pub fn line_num(&self) -> usize {
        self.line_num
    }
}

impl Iterator for MessageReader {
    type Item = Result<String, PesaError>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        self.line_num += 1;

        Some(line.map_err(|e| PesaError::IoError {
            message: format!("Line {}: {}", self.line_num, e),
        }))
    }
}
