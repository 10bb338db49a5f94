//! Output formats for records and aggregates
//!
//! This module centralizes presentation concerns:
//! - CSV export of parsed records
//! - Numbered plain-text listing of records
//! - Plain-text summary of every aggregate
//!
//! Amounts are rendered with two decimal places; the library keeps full
//! precision everywhere else.

use crate::core::time::describe_hour;
use crate::core::Summary;
use crate::types::{Direction, PesaError, TransactionRecord};
use serde::Serialize;
use std::io::{self, Write};

/// Width of the horizontal rules in text reports
const RULE_WIDTH: usize = 40;

/// CSV row for one exported record
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    direction: Direction,
    amount: String,
    counterparty: &'a str,
    occurred_at: &'a str,
    balance_after: String,
}

impl<'a> From<&'a TransactionRecord> for CsvRow<'a> {
    fn from(record: &'a TransactionRecord) -> Self {
        CsvRow {
            id: record.id(),
            direction: record.direction(),
            amount: format!("{:.2}", record.amount()),
            counterparty: record.counterparty(),
            occurred_at: record.occurred_at(),
            balance_after: format!("{:.2}", record.balance_after()),
        }
    }
}

/// Write records in CSV format
///
/// Columns: id, direction, amount, counterparty, occurred_at, balance_after.
/// Records keep their insertion order.
pub fn write_records_csv(
    records: &[TransactionRecord],
    output: &mut dyn Write,
) -> Result<(), PesaError> {
    let mut writer = csv::Writer::from_writer(output);

    for record in records {
        writer.serialize(CsvRow::from(record))?;
    }

    // An empty export still carries the header
    if records.is_empty() {
        writer.write_record([
            "id",
            "direction",
            "amount",
            "counterparty",
            "occurred_at",
            "balance_after",
        ])?;
    }

    writer
        .flush()
        .map_err(|e| PesaError::output(&format!("Failed to flush CSV writer: {}", e)))?;

    Ok(())
}

/// Write a numbered listing of records
pub fn write_records_list(
    records: &[TransactionRecord],
    output: &mut dyn Write,
) -> Result<(), PesaError> {
    list_records(records, output).map_err(|e| PesaError::output(&e.to_string()))
}

/// Write the aggregate summary
///
/// Maps are printed in the summary's order (names ascending, hours ascending).
/// `currency` prefixes every amount.
pub fn write_summary(
    summary: &Summary,
    currency: &str,
    output: &mut dyn Write,
) -> Result<(), PesaError> {
    summarize(summary, currency, output).map_err(|e| PesaError::output(&e.to_string()))
}

fn list_records(records: &[TransactionRecord], output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "=== ALL TRANSACTIONS ===")?;
    for (index, record) in records.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, record)?;
    }
    writeln!(output, "{}", "=".repeat(RULE_WIDTH))
}

fn summarize(summary: &Summary, currency: &str, output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "=== TRANSACTION SUMMARY ===")?;
    writeln!(output, "Total Transactions: {}", summary.count)?;
    writeln!(output, "Total Income: {} {:.2}", currency, summary.total_income)?;
    writeln!(output, "Total Expenses: {} {:.2}", currency, summary.total_expenses)?;
    writeln!(output, "Net Change: {} {:.2}", currency, summary.net_change)?;

    writeln!(output, "\n--- Most Frequent Parties ---")?;
    for (party, count) in &summary.frequency_by_counterparty {
        let noun = if *count == 1 { "transaction" } else { "transactions" };
        writeln!(output, "{}: {} {}", party, count, noun)?;
    }

    writeln!(output, "\n--- Spending by Party ---")?;
    for (party, total) in &summary.expense_by_counterparty {
        writeln!(output, "{}: {} {:.2}", party, currency, total)?;
    }

    writeln!(output, "\n--- Spending by Hour ---")?;
    for (hour, total) in &summary.expense_by_hour {
        writeln!(output, "{:02}:00 - {} {:.2}", hour, currency, total)?;
    }

    writeln!(output, "{}", "=".repeat(RULE_WIDTH))?;

    if let Some((hour, total)) = summary.peak_expense_hour {
        writeln!(output, "Peak Spending Time: {}", describe_hour(hour))?;
        writeln!(output, "Amount Spent: {} {:.2}", currency, total)?;
    }

    if let Some((party, total)) = &summary.top_expense_counterparty {
        writeln!(output, "You spend most with: {}", party)?;
        writeln!(output, "Total spent: {} {:.2}", currency, total)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransactionStore;
    use crate::io::samples::SAMPLE_MESSAGES;
    use rust_decimal::Decimal;

    fn sample_store() -> TransactionStore {
        let mut store = TransactionStore::new();
        store.extend_from_messages(SAMPLE_MESSAGES);
        store
    }

    #[test]
    fn test_write_records_csv() {
        let records = vec![
            TransactionRecord::new(
                "RBK4H8N2M1",
                Direction::Sent,
                Decimal::new(500, 0),
                "JOHN DOE",
                "15/1/26 2:30 PM",
                Decimal::new(500000, 2),
            ),
            TransactionRecord::new(
                "X",
                Direction::Unknown,
                Decimal::ZERO,
                "ACME, INC",
                "UNKNOWN",
                Decimal::ZERO,
            ),
        ];
        let mut output = Vec::new();

        write_records_csv(&records, &mut output).unwrap();

        let csv = String::from_utf8(output).unwrap();
        assert_eq!(
            csv,
            "id,direction,amount,counterparty,occurred_at,balance_after\n\
             RBK4H8N2M1,sent,500.00,JOHN DOE,15/1/26 2:30 PM,5000.00\n\
             X,unknown,0.00,\"ACME, INC\",UNKNOWN,0.00\n"
        );
    }

    #[test]
    fn test_write_records_csv_empty_has_header() {
        let mut output = Vec::new();
        write_records_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,direction,amount,counterparty,occurred_at,balance_after\n"
        );
    }

    #[test]
    fn test_write_records_list_numbers_records() {
        let store = sample_store();
        let mut output = Vec::new();

        write_records_list(store.records(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("=== ALL TRANSACTIONS ===\n1. Transaction[ID=RBK4H8N2M1, Type=sent"));
        assert!(text.contains("\n8. Transaction[ID=ZQM8R4T2V1"));
    }

    #[test]
    fn test_write_summary_for_samples() {
        let store = sample_store();
        let mut output = Vec::new();

        write_summary(&store.summary(), "Ksh", &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Total Transactions: 8\n"));
        assert!(text.contains("Total Income: Ksh 3700.00\n"));
        assert!(text.contains("Total Expenses: Ksh 2600.50\n"));
        assert!(text.contains("Net Change: Ksh 1099.50\n"));
        assert!(text.contains("JOHN DOE: 2 transactions\n"));
        assert!(text.contains("JANE SMITH: 1 transaction\n"));
        assert!(text.contains("NAIVAS SUPERMARKET: Ksh 1400.00\n"));
        assert!(text.contains("17:00 - Ksh 800.00\n"));
        assert!(text.contains("Peak Spending Time: 5:00 PM (Afternoon/Evening)\n"));
        assert!(text.contains("You spend most with: NAIVAS SUPERMARKET\n"));
    }

    #[test]
    fn test_write_summary_hours_ascending() {
        let store = sample_store();
        let mut output = Vec::new();
        write_summary(&store.summary(), "Ksh", &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        let hours: Vec<&str> = text
            .lines()
            .filter(|line| line.contains(":00 - Ksh"))
            .map(|line| &line[..5])
            .collect();
        assert_eq!(hours, vec!["13:00", "14:00", "15:00", "17:00", "18:00", "19:00"]);
    }

    #[test]
    fn test_write_summary_empty_store_has_no_analysis() {
        let store = TransactionStore::new();
        let mut output = Vec::new();
        write_summary(&store.summary(), "Ksh", &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Total Transactions: 0\n"));
        assert!(!text.contains("Peak Spending Time"));
        assert!(!text.contains("You spend most with"));
    }
}
