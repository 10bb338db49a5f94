//! Transaction storage and aggregation
//!
//! This module provides the TransactionStore component that owns every parsed
//! record and answers analytical questions over them: income and expense
//! totals, per-counterparty frequency and spending, and spending per hour of
//! day.
//!
//! # Ordering
//!
//! Records are kept in insertion order. Aggregates are returned as hash maps
//! with no ordering guarantee; [`TransactionStore::summary`] collects them
//! into sorted maps for presentation.
//!
//! # Duplicate Handling
//!
//! No uniqueness is enforced on record identifiers. Adding the same message
//! twice stores two equal records and both count toward every aggregate.
//!
//! # Overflow
//!
//! Sums saturate at `Decimal::MAX` / `Decimal::MIN` instead of panicking,
//! so very large amounts that parse still produce aggregates.
//!
//! # Thread Safety
//!
//! The store is a plain single-owner collection. Hosts that add records from
//! several threads must serialize access themselves (e.g. behind a `Mutex`).

use crate::core::parser::{MessageParser, MpesaParser};
use crate::core::time::hour_of_day;
use crate::types::{Direction, PesaError, TransactionRecord};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

/// Ordered collection of parsed transactions
///
/// Generic over the parser used by [`TransactionStore::add_from_message`];
/// defaults to the M-PESA parser.
#[derive(Debug, Clone)]
pub struct TransactionStore<P = MpesaParser> {
    /// Records in insertion order
    records: Vec<TransactionRecord>,
    parser: P,
}

/// Snapshot of every aggregate, with deterministic ordering
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_change: Decimal,
    /// Record count per counterparty, sorted by name
    pub frequency_by_counterparty: BTreeMap<String, usize>,
    /// Expense total per counterparty, sorted by name
    pub expense_by_counterparty: BTreeMap<String, Decimal>,
    /// Expense total per hour of day, ascending
    pub expense_by_hour: BTreeMap<u8, Decimal>,
    pub peak_expense_hour: Option<(u8, Decimal)>,
    pub top_expense_counterparty: Option<(String, Decimal)>,
}

impl TransactionStore<MpesaParser> {
    /// Create a new empty store using the default M-PESA parser
    pub fn new() -> Self {
        Self::with_parser(MpesaParser::default())
    }
}

impl Default for TransactionStore<MpesaParser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MessageParser> TransactionStore<P> {
    /// Create a new empty store that parses messages with `parser`
    pub fn with_parser(parser: P) -> Self {
        TransactionStore {
            records: Vec::new(),
            parser,
        }
    }

    /// Append a record
    ///
    /// Accepts either a record or an `Option`; `None` is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use pesa_flow::{parse_message, TransactionRecord, TransactionStore};
    ///
    /// let mut store = TransactionStore::new();
    /// store.add(parse_message("ABC Ksh10 sent to A on 1/1/26 at 9:00 AM.").ok());
    /// store.add(None::<TransactionRecord>);
    /// assert_eq!(store.count(), 1);
    /// ```
    pub fn add(&mut self, record: impl Into<Option<TransactionRecord>>) {
        if let Some(record) = record.into() {
            tracing::debug!(id = record.id(), direction = %record.direction(), "transaction added");
            self.records.push(record);
        }
    }

    /// Parse a message and append the resulting record
    ///
    /// # Returns
    ///
    /// * `Ok(&TransactionRecord)` - The record that was appended
    /// * `Err(PesaError::EmptyInput)` - If the message is blank; the store is unchanged
    pub fn add_from_message(&mut self, text: &str) -> Result<&TransactionRecord, PesaError> {
        let record = self.parser.parse(text)?;
        self.add(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Parse and append a sequence of messages
    ///
    /// Messages that fail to parse are logged and skipped.
    ///
    /// # Returns
    ///
    /// The number of records added
    pub fn extend_from_messages<I, S>(&mut self, messages: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.records.len();
        for (index, message) in messages.into_iter().enumerate() {
            if let Err(e) = self.add_from_message(message.as_ref()) {
                tracing::warn!(position = index + 1, error = %e, "skipping message");
            }
        }
        self.records.len() - before
    }

    /// Number of stored records
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Whether no record has been added
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// Iterate over records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter()
    }

    /// Sum of amounts over `Sent` records
    pub fn total_expenses(&self) -> Decimal {
        self.total_for(Direction::Sent)
    }

    /// Sum of amounts over `Received` records
    pub fn total_income(&self) -> Decimal {
        self.total_for(Direction::Received)
    }

    /// Income minus expenses
    pub fn net_change(&self) -> Decimal {
        self.total_income().saturating_sub(self.total_expenses())
    }

    /// Record count per counterparty, over all directions
    pub fn frequency_by_counterparty(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for record in &self.records {
            *counts.entry(record.counterparty().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Expense total per counterparty, over `Sent` records
    pub fn expense_by_counterparty(&self) -> HashMap<String, Decimal> {
        let mut totals = HashMap::new();
        for record in self.expenses() {
            let total = totals
                .entry(record.counterparty().to_string())
                .or_insert(Decimal::ZERO);
            *total = total.saturating_add(record.amount());
        }
        totals
    }

    /// Expense total per hour of day (0-23), over `Sent` records
    ///
    /// Records whose occurrence time has no recognizable hour are left out of
    /// this aggregate only.
    pub fn expense_by_hour(&self) -> HashMap<u8, Decimal> {
        let mut totals = HashMap::new();
        for record in self.expenses() {
            match hour_of_day(record.occurred_at()) {
                Some(hour) => {
                    let total = totals.entry(hour).or_insert(Decimal::ZERO);
                    *total = total.saturating_add(record.amount());
                }
                None => tracing::debug!(
                    id = record.id(),
                    occurred_at = record.occurred_at(),
                    "no hour in occurrence time, skipping"
                ),
            }
        }
        totals
    }

    /// Hour with the largest positive expense total
    ///
    /// Ties go to the earliest hour.
    pub fn peak_expense_hour(&self) -> Option<(u8, Decimal)> {
        self.expense_by_hour()
            .into_iter()
            .filter(|(_, total)| *total > Decimal::ZERO)
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
    }

    /// Counterparty with the largest positive expense total
    ///
    /// Ties go to the name that sorts first.
    pub fn top_expense_counterparty(&self) -> Option<(String, Decimal)> {
        self.expense_by_counterparty()
            .into_iter()
            .filter(|(_, total)| *total > Decimal::ZERO)
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
    }

    /// Compute every aggregate at once
    pub fn summary(&self) -> Summary {
        Summary {
            count: self.count(),
            total_income: self.total_income(),
            total_expenses: self.total_expenses(),
            net_change: self.net_change(),
            frequency_by_counterparty: self.frequency_by_counterparty().into_iter().collect(),
            expense_by_counterparty: self.expense_by_counterparty().into_iter().collect(),
            expense_by_hour: self.expense_by_hour().into_iter().collect(),
            peak_expense_hour: self.peak_expense_hour(),
            top_expense_counterparty: self.top_expense_counterparty(),
        }
    }

    fn expenses(&self) -> impl Iterator<Item = &TransactionRecord> {
        self.records.iter().filter(|record| record.is_expense())
    }

    fn total_for(&self, direction: Direction) -> Decimal {
        self.records
            .iter()
            .filter(|record| record.direction() == direction)
            .map(TransactionRecord::amount)
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }
}

impl<'a, P> IntoIterator for &'a TransactionStore<P> {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
