//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: Transaction records and money flow direction
//! - `error`: Error types for the tracker

pub mod error;
pub mod transaction;

pub use error::PesaError;
pub use transaction::{Direction, TransactionRecord, UNKNOWN};
