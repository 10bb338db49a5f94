//! Transaction-related types for the PesaFlow tracker
//!
//! This module defines the direction of a money movement and the immutable
//! record extracted from a single mobile-money notification.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Sentinel used when a textual field cannot be determined
pub const UNKNOWN: &str = "UNKNOWN";

/// Direction of a money movement relative to the tracked account
///
/// Only `Sent` amounts count toward expenses and only `Received` amounts
/// count toward income. `Unknown` records are kept but never summed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Money leaving the account (transfers, payments, withdrawals)
    Sent,

    /// Money entering the account (incoming transfers, deposits)
    Received,

    /// No direction keyword was found in the message
    Unknown,
}

impl Direction {
    /// Lowercase label used for display and CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Sent => "sent",
            Direction::Received => "received",
            Direction::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sent" => Ok(Direction::Sent),
            "received" => Ok(Direction::Received),
            "unknown" => Ok(Direction::Unknown),
            other => Err(format!("Invalid direction: '{}'", other)),
        }
    }
}

/// Structured record extracted from one notification message
///
/// Records are value objects: fields are private and only readable through
/// accessors, so a record never changes after the parser builds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    id: String,
    direction: Direction,
    amount: Decimal,
    counterparty: String,
    occurred_at: String,
    balance_after: Decimal,
}

impl TransactionRecord {
    /// Create a new record
    ///
    /// # Arguments
    ///
    /// * `id` - Opaque identifier (first token of the message)
    /// * `direction` - Money flow direction
    /// * `amount` - Non-negative transaction amount
    /// * `counterparty` - Other party, or [`UNKNOWN`]
    /// * `occurred_at` - Free-form "date time" text, or [`UNKNOWN`]
    /// * `balance_after` - Balance following the transaction (0 when absent)
    pub fn new(
        id: impl Into<String>,
        direction: Direction,
        amount: Decimal,
        counterparty: impl Into<String>,
        occurred_at: impl Into<String>,
        balance_after: Decimal,
    ) -> Self {
        TransactionRecord {
            id: id.into(),
            direction,
            amount,
            counterparty: counterparty.into(),
            occurred_at: occurred_at.into(),
            balance_after,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn counterparty(&self) -> &str {
        &self.counterparty
    }

    pub fn occurred_at(&self) -> &str {
        &self.occurred_at
    }

    pub fn balance_after(&self) -> Decimal {
        self.balance_after
    }

    /// Whether the amount counts toward expenses
    pub fn is_expense(&self) -> bool {
        self.direction == Direction::Sent
    }

    /// Whether the amount counts toward income
    pub fn is_income(&self) -> bool {
        self.direction == Direction::Received
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transaction[ID={}, Type={}, Amount={:.2}, Party={}, Date={}, Balance={:.2}]",
            self.id,
            self.direction,
            self.amount,
            self.counterparty,
            self.occurred_at,
            self.balance_after
        )
    }
}
