//! Message parsing
//!
//! This module turns one free-form mobile-money notification into a
//! [`TransactionRecord`]. Each field is extracted by an independent rule that
//! falls back to a sentinel (`"UNKNOWN"` or zero) when it cannot find what it
//! is looking for, so any non-blank message yields a record.
//!
//! # Extraction Rules
//!
//! - **Identifier**: first whitespace-delimited token
//! - **Direction**: first matching keyword in priority order
//!   (`sent to`/`paid to`, `received from`, `withdraw`, `deposit`)
//! - **Amount**: digits after the first currency marker
//! - **Counterparty**: text between the direction phrase and `" on "` or `"."`
//! - **Occurrence time**: text after `" on "` up to the balance section
//! - **Balance after**: digits after `"balance is"` and the currency marker
//!
//! Parsing is pure: the same input always produces an equal record.

use crate::core::config::ParserConfig;
use crate::types::{Direction, PesaError, TransactionRecord, UNKNOWN};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Direction keywords in priority order; the first one present wins
const DIRECTION_RULES: [(&str, Direction); 5] = [
    ("sent to", Direction::Sent),
    ("paid to", Direction::Sent),
    ("received from", Direction::Received),
    ("withdraw", Direction::Sent),
    ("deposit", Direction::Received),
];

/// Phrases that introduce the counterparty of an outgoing transaction
const SENT_PHRASES: [&str; 2] = ["sent to", "paid to"];

/// Phrase that introduces the counterparty of an incoming transaction
const RECEIVED_PHRASE: &str = "received from";

/// Separates the counterparty from the occurrence time
const ON_DELIMITER: &str = " on ";

/// Joins date and time inside the occurrence-time section
const AT_DELIMITER: &str = " at ";

/// Phrase preceding the post-transaction balance
const BALANCE_PHRASE: &str = "balance is";

/// Trait for turning raw message text into transaction records
///
/// Implementations must be pure: no shared mutable state, so a parser can be
/// used from several threads at once.
pub trait MessageParser {
    /// Parse one message
    ///
    /// # Returns
    ///
    /// * `Ok(TransactionRecord)` - For any non-blank input
    /// * `Err(PesaError::EmptyInput)` - If the text is blank after trimming
    fn parse(&self, text: &str) -> Result<TransactionRecord, PesaError>;
}

/// Parser for M-PESA style notifications
#[derive(Debug, Clone, Default)]
pub struct MpesaParser {
    config: ParserConfig,
}

impl MpesaParser {
    /// Create a parser with custom markers
    pub fn new(config: ParserConfig) -> Self {
        MpesaParser { config }
    }

    /// Markers this parser keys on
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Amount following the first currency marker, or zero
    fn extract_amount(&self, text: &str) -> Decimal {
        let marker = self.config.currency_marker.as_str();
        text.find(marker)
            .and_then(|idx| self.scan_number(&text[idx + marker.len()..]))
            .unwrap_or_else(|| {
                tracing::trace!("no amount found, defaulting to zero");
                Decimal::ZERO
            })
    }

    /// Balance following `balance is <marker>`, or zero
    fn extract_balance(&self, text: &str) -> Decimal {
        let marker = self.config.currency_marker.as_str();
        text.match_indices(BALANCE_PHRASE)
            .find_map(|(idx, phrase)| {
                text[idx + phrase.len()..].trim_start().strip_prefix(marker)
            })
            .and_then(|rest| self.scan_number(rest))
            .unwrap_or_else(|| {
                tracing::trace!("no balance found, defaulting to zero");
                Decimal::ZERO
            })
    }

    /// Occurrence time between `" on "` and the balance section
    ///
    /// Falls back to the first `"."` when the balance marker is missing. The
    /// sentence-ending period is dropped and `" at "` becomes a single space,
    /// so `"on 15/1/26 at 2:30 PM."` yields `"15/1/26 2:30 PM"`.
    fn extract_occurred_at(&self, text: &str) -> String {
        let Some(idx) = text.find(ON_DELIMITER) else {
            return UNKNOWN.to_string();
        };
        let after = &text[idx + ON_DELIMITER.len()..];

        let end = after
            .find(self.config.balance_marker.as_str())
            .or_else(|| after.find('.'));
        let Some(end) = end else {
            return UNKNOWN.to_string();
        };

        let section = after[..end]
            .trim()
            .trim_end_matches('.')
            .trim_end()
            .replace(AT_DELIMITER, " ");

        if section.is_empty() {
            UNKNOWN.to_string()
        } else {
            section
        }
    }

    /// Collect a decimal number from the start of `rest`
    ///
    /// Thousands separators are skipped, a second decimal point ends the
    /// number, and anything else that is not a digit stops the scan.
    fn scan_number(&self, rest: &str) -> Option<Decimal> {
        let mut digits = String::new();
        let mut seen_point = false;

        for c in rest.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
            } else if c == self.config.thousands_separator {
                continue;
            } else if c == '.' && !seen_point {
                seen_point = true;
                digits.push(c);
            } else {
                break;
            }
        }

        let digits = digits.strip_suffix('.').unwrap_or(&digits);
        if digits.is_empty() {
            return None;
        }

        if digits.starts_with('.') {
            Decimal::from_str(&format!("0{}", digits)).ok()
        } else {
            Decimal::from_str(digits).ok()
        }
    }
}

impl MessageParser for MpesaParser {
    fn parse(&self, text: &str) -> Result<TransactionRecord, PesaError> {
        if text.trim().is_empty() {
            return Err(PesaError::EmptyInput);
        }

        let direction = detect_direction(text);

        Ok(TransactionRecord::new(
            extract_id(text),
            direction,
            self.extract_amount(text),
            extract_counterparty(text, direction),
            self.extract_occurred_at(text),
            self.extract_balance(text),
        ))
    }
}

/// Parse a message with the default M-PESA configuration
pub fn parse_message(text: &str) -> Result<TransactionRecord, PesaError> {
    MpesaParser::default().parse(text)
}

/// First whitespace-delimited token
fn extract_id(text: &str) -> String {
    text.split_whitespace().next().unwrap_or(UNKNOWN).to_string()
}

/// Case-insensitive keyword search in priority order
fn detect_direction(text: &str) -> Direction {
    let lower = text.to_ascii_lowercase();
    DIRECTION_RULES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|&(_, direction)| direction)
        .unwrap_or(Direction::Unknown)
}

/// Name between the direction phrase and the next `" on "` (or `"."`)
///
/// Unlike direction detection, the phrase must match case exactly.
fn extract_counterparty(text: &str, direction: Direction) -> String {
    let phrase_end = match direction {
        Direction::Sent => SENT_PHRASES
            .iter()
            .find_map(|phrase| text.find(*phrase).map(|idx| idx + phrase.len())),
        Direction::Received => text
            .find(RECEIVED_PHRASE)
            .map(|idx| idx + RECEIVED_PHRASE.len()),
        Direction::Unknown => None,
    };

    let Some(start) = phrase_end else {
        return UNKNOWN.to_string();
    };
    let rest = &text[start..];

    rest.find(ON_DELIMITER)
        .or_else(|| rest.find('.'))
        .map(|end| rest[..end].trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SENT_MESSAGE: &str = "RBK4H8N2M1 Confirmed. Ksh500.00 sent to JOHN DOE on 15/1/26 at 2:30 PM. New M-PESA balance is Ksh5,000.00";
    const RECEIVED_MESSAGE: &str = "SAL9K3P7X4 Confirmed. Ksh1,200.00 received from JANE SMITH on 15/1/26 at 10:15 AM. New M-PESA balance is Ksh6,200.00";

    #[test]
    fn test_parse_sent_message() {
        let record = parse_message(SENT_MESSAGE).unwrap();

        assert_eq!(record.id(), "RBK4H8N2M1");
        assert_eq!(record.direction(), Direction::Sent);
        assert_eq!(record.amount(), Decimal::new(50000, 2));
        assert_eq!(record.counterparty(), "JOHN DOE");
        assert_eq!(record.occurred_at(), "15/1/26 2:30 PM");
        assert_eq!(record.balance_after(), Decimal::new(500000, 2));
    }

    #[test]
    fn test_parse_received_message() {
        let record = parse_message(RECEIVED_MESSAGE).unwrap();

        assert_eq!(record.id(), "SAL9K3P7X4");
        assert_eq!(record.direction(), Direction::Received);
        assert_eq!(record.amount(), Decimal::new(120000, 2));
        assert_eq!(record.counterparty(), "JANE SMITH");
        assert_eq!(record.occurred_at(), "15/1/26 10:15 AM");
        assert_eq!(record.balance_after(), Decimal::new(620000, 2));
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    #[case::mixed_whitespace(" \t\n ")]
    fn test_blank_input_is_rejected(#[case] text: &str) {
        assert_eq!(parse_message(text), Err(PesaError::EmptyInput));
    }

    #[rstest]
    #[case::sent_to("X Ksh1 sent to A on d.", Direction::Sent)]
    #[case::paid_to("X Ksh1 paid to SHOP on d.", Direction::Sent)]
    #[case::received_from("X Ksh1 received from B on d.", Direction::Received)]
    #[case::withdraw("X Withdraw Ksh1 from agent.", Direction::Sent)]
    #[case::deposit("X Give Ksh1 cash to agent for deposit.", Direction::Received)]
    #[case::uppercase("X KSH1 SENT TO A ON D.", Direction::Sent)]
    #[case::sent_beats_received("X received from A then sent to B.", Direction::Sent)]
    #[case::received_beats_withdraw("X received from A after withdraw.", Direction::Received)]
    #[case::withdraw_beats_deposit("X deposit then withdrawal.", Direction::Sent)]
    #[case::none("X Your airtime bundle is active.", Direction::Unknown)]
    fn test_direction_priority(#[case] text: &str, #[case] expected: Direction) {
        assert_eq!(parse_message(text).unwrap().direction(), expected);
    }

    #[rstest]
    #[case::plain("X Ksh500.00 sent", Decimal::new(50000, 2))]
    #[case::thousands("X Ksh1,500.00 sent", Decimal::new(150000, 2))]
    #[case::millions("X Ksh1,234,567.89 sent", Decimal::new(123456789, 2))]
    #[case::integer("X Ksh75 sent", Decimal::new(75, 0))]
    #[case::sentence_end("X paid Ksh300.50.", Decimal::new(30050, 2))]
    #[case::trailing_point("X paid Ksh300.", Decimal::new(300, 0))]
    #[case::leading_point("X paid Ksh.50 sent", Decimal::new(50, 2))]
    #[case::first_marker_wins("X Ksh10 sent, Ksh20 fee", Decimal::new(10, 0))]
    #[case::space_after_marker("X Ksh 500 sent", Decimal::ZERO)]
    #[case::no_digits("X Ksh sent", Decimal::ZERO)]
    #[case::no_marker("X 500.00 sent to A on d.", Decimal::ZERO)]
    fn test_amount_extraction(#[case] text: &str, #[case] expected: Decimal) {
        assert_eq!(parse_message(text).unwrap().amount(), expected);
    }

    #[rstest]
    #[case::sent_on("X Ksh1 sent to  JOHN DOE  on 1/1/26 at 1:00 PM.", "JOHN DOE")]
    #[case::paid_on("X Ksh1 paid to NAIVAS on 1/1/26 at 1:00 PM.", "NAIVAS")]
    #[case::received_on("X Ksh1 received from JANE on 1/1/26.", "JANE")]
    #[case::period_fallback("X Ksh1 sent to SAFARICOM LTD. Thanks", "SAFARICOM LTD")]
    #[case::on_preferred_over_period("X Ksh1 paid to A.B. STORES on 1/1/26.", "A.B. STORES")]
    #[case::no_delimiter("X Ksh1 sent to NOBODY", UNKNOWN)]
    #[case::empty_name("X Ksh1 sent to on 1/1/26.", UNKNOWN)]
    #[case::withdraw_has_no_party("X Withdraw Ksh1 from agent on 1/1/26.", UNKNOWN)]
    #[case::deposit_has_no_party("X deposit of Ksh1 on 1/1/26.", UNKNOWN)]
    #[case::phrase_case_must_match("X Ksh1 Sent To MARY on 1/1/26.", UNKNOWN)]
    #[case::received_case_must_match("X Ksh1 Received From BOB on 1/1/26.", UNKNOWN)]
    fn test_counterparty_extraction(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(parse_message(text).unwrap().counterparty(), expected);
    }

    #[test]
    fn test_unknown_direction_never_has_counterparty() {
        let record =
            parse_message("X Ksh1 transferred to MARY on 1/1/26. received frm BOB.").unwrap();
        assert_eq!(record.direction(), Direction::Unknown);
        assert_eq!(record.counterparty(), UNKNOWN);
    }

    #[rstest]
    #[case::balance_marker(SENT_MESSAGE, "15/1/26 2:30 PM")]
    #[case::period_fallback("X Ksh1 sent to A on 3/2/26 at 6:45 PM. Thanks", "3/2/26 6:45 PM")]
    #[case::no_at("X Ksh1 sent to A on 3/2/26 6:45 PM.", "3/2/26 6:45 PM")]
    #[case::no_on("X Ksh1 sent to A. New M-PESA balance is Ksh2", UNKNOWN)]
    #[case::no_end("X Ksh1 sent to A on 3/2/26 at 6:45 PM", UNKNOWN)]
    fn test_occurred_at_extraction(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(parse_message(text).unwrap().occurred_at(), expected);
    }

    #[rstest]
    #[case::with_separator(SENT_MESSAGE, Decimal::new(500000, 2))]
    #[case::extra_space("X balance is  Ksh42.10 now", Decimal::new(4210, 2))]
    #[case::trailing_sentence("X balance is Ksh5,000.00. Transaction cost, Ksh0.00.", Decimal::new(500000, 2))]
    #[case::missing_phrase("X Ksh1 sent to A on d. New M-PESA Ksh9", Decimal::ZERO)]
    #[case::missing_marker("X balance is 900", Decimal::ZERO)]
    #[case::second_phrase_matches("X balance is low. Your balance is Ksh12", Decimal::new(12, 0))]
    fn test_balance_extraction(#[case] text: &str, #[case] expected: Decimal) {
        assert_eq!(parse_message(text).unwrap().balance_after(), expected);
    }

    #[test]
    fn test_message_without_marker_has_zero_amounts() {
        let record = parse_message("HELLO sent to A on 1/1/26 at 9:00 AM. balance is 12").unwrap();
        assert_eq!(record.amount(), Decimal::ZERO);
        assert_eq!(record.balance_after(), Decimal::ZERO);
    }

    #[test]
    fn test_id_is_first_token() {
        let record = parse_message("  \tQRT7Y2K5J9   Confirmed").unwrap();
        assert_eq!(record.id(), "QRT7Y2K5J9");
    }

    #[test]
    fn test_parsing_is_deterministic() {
        assert_eq!(
            parse_message(SENT_MESSAGE).unwrap(),
            parse_message(SENT_MESSAGE).unwrap()
        );
    }

    #[test]
    fn test_custom_config() {
        let parser = MpesaParser::new(ParserConfig::new("TSh", '\'', "Salio"));
        let record = parser
            .parse("AB12 Imethibitishwa. TSh12'500.00 sent to ALI on 2/2/26 at 8:05 AM. Salio balance is TSh40'000")
            .unwrap();

        assert_eq!(record.amount(), Decimal::new(1250000, 2));
        assert_eq!(record.occurred_at(), "2/2/26 8:05 AM");
        assert_eq!(record.balance_after(), Decimal::new(40000, 0));
        assert_eq!(parser.config().currency_marker, "TSh");
    }

    #[test]
    fn test_non_ascii_text_around_phrases() {
        let record =
            parse_message("Ñ1 Ksh20 sent to JOSÉ MUÑOZ on 1/1/26 at 12:05 AM. New M-PESA").unwrap();
        assert_eq!(record.counterparty(), "JOSÉ MUÑOZ");
        assert_eq!(record.occurred_at(), "1/1/26 12:05 AM");
    }

    #[test]
    fn test_parser_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MpesaParser>();
    }
}
