//! Core business logic module
//!
//! This module contains the message processing components:
//! - `config` - Markers the parser keys on
//! - `parser` - Extraction of one record from one message
//! - `time` - Hour-of-day decomposition of occurrence times
//! - `transaction_store` - Record collection and aggregates

pub mod config;
pub mod parser;
pub mod time;
pub mod transaction_store;

pub use config::ParserConfig;
pub use parser::{parse_message, MessageParser, MpesaParser};
pub use transaction_store::{Summary, TransactionStore};
