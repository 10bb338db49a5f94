//! Hour-of-day extraction from free-form occurrence times
//!
//! Occurrence times are kept as text (`"15/1/26 2:30 PM"`). Hourly aggregates
//! only need the hour, converted to 24-hour form.

/// Hour (0-23) of an occurrence time shaped `"<date> <H:MM> <AM|PM>"`
///
/// Returns `None` for anything that does not have at least three
/// whitespace-separated tokens or whose hour token is not an integer.
pub fn hour_of_day(occurred_at: &str) -> Option<u8> {
    let mut tokens = occurred_at.split_whitespace();
    let _date = tokens.next()?;
    let time = tokens.next()?;
    let period = tokens.next()?;

    let hour: u8 = time.split(':').next()?.trim().parse().ok()?;

    let hour = if period.eq_ignore_ascii_case("PM") && hour != 12 {
        hour.checked_add(12)?
    } else if period.eq_ignore_ascii_case("AM") && hour == 12 {
        0
    } else {
        hour
    };

    (hour < 24).then_some(hour)
}

/// Human label for an hour bucket, e.g. `"2:00 PM (Afternoon/Evening)"`
///
/// Morning hours keep their 24-hour number, so midnight reads `"0:00 AM"`.
pub fn describe_hour(hour: u8) -> String {
    match hour {
        h if h < 12 => format!("{}:00 AM (Morning)", h),
        12 => "12:00 PM (Noon)".to_string(),
        h => format!("{}:00 PM (Afternoon/Evening)", h - 12),
    }
}
