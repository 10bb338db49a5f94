//! Parser configuration
//!
//! Holds the fixed tokens the message parser keys on. The defaults describe
//! M-PESA notifications; other mobile-money providers that follow the same
//! pattern family can be handled by swapping the markers.

/// Default currency marker preceding every amount
pub const DEFAULT_CURRENCY_MARKER: &str = "Ksh";

/// Default thousands separator skipped inside amounts
pub const DEFAULT_THOUSANDS_SEPARATOR: char = ',';

/// Default marker that opens the balance section of a message
pub const DEFAULT_BALANCE_MARKER: &str = "New M-PESA";

/// Tokens used by the message parser
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Token immediately preceding a monetary amount
    pub currency_marker: String,
    /// Character skipped while scanning digits
    pub thousands_separator: char,
    /// Start of the balance section; ends the occurrence-time text
    pub balance_marker: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            currency_marker: DEFAULT_CURRENCY_MARKER.to_string(),
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR,
            balance_marker: DEFAULT_BALANCE_MARKER.to_string(),
        }
    }
}

impl ParserConfig {
    /// Create a ParserConfig with custom values
    ///
    /// Blank markers and a separator that is a digit, whitespace or the
    /// decimal point would make the scan rules ambiguous; those fall back to
    /// the defaults with a warning.
    pub fn new(currency_marker: &str, thousands_separator: char, balance_marker: &str) -> Self {
        let default = Self::default();

        let currency_marker = if currency_marker.trim().is_empty() {
            tracing::warn!(
                default = %default.currency_marker,
                "blank currency marker, using default"
            );
            default.currency_marker
        } else {
            currency_marker.to_string()
        };

        let thousands_separator = if thousands_separator.is_ascii_digit()
            || thousands_separator.is_whitespace()
            || thousands_separator == '.'
        {
            tracing::warn!(
                separator = %thousands_separator,
                default = %default.thousands_separator,
                "invalid thousands separator, using default"
            );
            default.thousands_separator
        } else {
            thousands_separator
        };

        let balance_marker = if balance_marker.trim().is_empty() {
            tracing::warn!(
                default = %default.balance_marker,
                "blank balance marker, using default"
            );
            default.balance_marker
        } else {
            balance_marker.to_string()
        };

        Self {
            currency_marker,
            thousands_separator,
            balance_marker,
        }
    }
}
