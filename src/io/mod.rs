//! I/O module
//!
//! Handles message input and report output.
//!
//! # Components
//!
//! - `message_reader` - Line-oriented message file reader with iterator interface
//! - `report` - CSV export, record listing and summary rendering
//! - `samples` - Built-in sample notifications

pub mod message_reader;
pub mod report;
pub mod samples;

pub use message_reader::MessageReader;
pub use report::{write_records_csv, write_records_list, write_summary};
pub use samples::SAMPLE_MESSAGES;
