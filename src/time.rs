//! Wall-clock helpers for opening hours and itinerary display.
//!
//! All scheduling arithmetic works in whole minutes since midnight;
//! these functions convert between that representation and the `HH:MM`
//! strings supplied by callers or the 12-hour labels shown to users.

use thiserror::Error;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// A time string that is not a valid 24-hour `HH:MM` value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time string {input:?}: expected 24-hour HH:MM")]
pub struct InvalidTimeFormat {
    pub input: String,
}

/// Parses a 24-hour `HH:MM` string into minutes since midnight.
///
/// Requires exactly two colon-separated integer fields with hours in
/// 0..=23 and minutes in 0..=59.
pub fn time_to_minutes(s: &str) -> Result<i32, InvalidTimeFormat> {
    let err = || InvalidTimeFormat {
        input: s.to_string(),
    };

    let (hours, minutes) = s.split_once(':').ok_or_else(err)?;
    if minutes.contains(':') {
        return Err(err());
    }

    let hours: i32 = hours.parse().map_err(|_| err())?;
    let minutes: i32 = minutes.parse().map_err(|_| err())?;

    if !(0..=23).contains(&hours) || !(0..=59).contains(&minutes) {
        return Err(err());
    }

    Ok(hours * 60 + minutes)
}

/// Like [`time_to_minutes`], but an empty string means midnight.
///
/// This is the convention for callers that leave the opening time blank
/// to mean "open from the start of the day".
pub fn time_to_minutes_or_midnight(s: &str) -> Result<i32, InvalidTimeFormat> {
    if s.is_empty() {
        return Ok(0);
    }
    time_to_minutes(s)
}

/// Formats minutes since midnight as a 12-hour `h:mm AM/PM` label.
///
/// Values outside a single day are wrapped modulo 24 hours first, so a
/// departure that arithmetic pushed past midnight still renders as a
/// valid clock time.
pub fn minutes_to_label(minutes: i32) -> String {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
    let hour = wrapped / 60;
    let minute = wrapped % 60;

    let ampm = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };

    format!("{hour12}:{minute:02} {ampm}")
}

/// Formats a duration in minutes as a human-readable string, e.g.
/// "45 minutes", "2 hours", "1 hour 5 minutes".
pub fn format_duration(minutes: i32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    let hour_word = if hours == 1 { "hour" } else { "hours" };
    let minute_word = if mins == 1 { "minute" } else { "minutes" };

    if hours == 0 {
        format!("{mins} {minute_word}")
    } else if mins == 0 {
        format!("{hours} {hour_word}")
    } else {
        format!("{hours} {hour_word} {mins} {minute_word}")
    }
}
