//! PesaFlow Library
//! # Overview
//!
//! This library extracts structured transaction records from free-form
//! mobile-money notification messages (M-PESA style SMS) and aggregates them
//! into totals, per-counterparty spending and per-hour spending patterns.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TransactionRecord, Direction, errors)
//! - [`core`] - Business logic components:
//!   - [`core::parser`] - Extraction of one record from one message
//!   - [`core::transaction_store`] - Record collection and aggregates
//!   - [`core::time`] - Hour-of-day decomposition
//!   - [`core::config`] - Markers the parser keys on
//! - [`io`] - Message file reading and report output
//! - [`cli`] - CLI arguments parsing and logging setup
//! - [`pipeline`] - One end-to-end run: read, parse, aggregate, render
//!
//! # Example
//!
//! ```
//! use pesa_flow::{Direction, TransactionStore};
//!
//! let mut store = TransactionStore::new();
//! let record = store
//!     .add_from_message("RBK4H8N2M1 Confirmed. Ksh500.00 sent to JOHN DOE on 15/1/26 at 2:30 PM. New M-PESA balance is Ksh5,000.00")
//!     .unwrap();
//! assert_eq!(record.direction(), Direction::Sent);
//! assert_eq!(record.counterparty(), "JOHN DOE");
//! assert_eq!(store.expense_by_hour().len(), 1);
//! ```
//!
//! # Sentinels
//!
//! Fields that cannot be extracted are not errors. Text fields fall back to
//! `"UNKNOWN"` and amounts to zero, so a sentinel value may mean either
//! "absent" or "failed to extract". Only a blank message is rejected.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use self::core::{
    parse_message, MessageParser, MpesaParser, ParserConfig, Summary, TransactionStore,
};
pub use types::{Direction, PesaError, TransactionRecord, UNKNOWN};
