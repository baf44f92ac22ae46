//! Wall-clock input parsing.
//!
//! Two grammars are accepted, tried in order:
//!
//! 1. Colon form: `H:MM`, `HH:MM`, `H:MM:SS`, `HH:MM:SS`
//! 2. Compact form: `HHMM` or `HHMMSS` (exactly 4 or 6 digits)
//!
//! A string that matches a grammar but carries an out-of-range field is an
//! [`ParseError::InvalidValue`]; anything else is [`ParseError::InvalidFormat`].
//! Input is matched as-is, so callers trim user input first.

use super::TimeOfDay;

/// Errors produced when parsing a time of day.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid time format: '{0}' (expected HH:MM, HH:MM:SS, HHMM or HHMMSS)")]
    InvalidFormat(String),

    #[error("Invalid time value: {hours:02}:{minutes:02}:{seconds:02} is out of range")]
    InvalidValue {
        hours: u32,
        minutes: u32,
        seconds: u32,
    },
}

/// Raw fields of a structurally valid time string.
struct Fields<'a> {
    hours: &'a str,
    minutes: &'a str,
    seconds: Option<&'a str>,
}

/// Parse a time string into seconds since midnight.
///
/// ```
/// use livejump::time::parse;
///
/// assert_eq!(parse("14:30").unwrap().as_secs(), 52_200);
/// assert_eq!(parse("143045").unwrap().as_secs(), 52_245);
/// assert!(parse("24:00").is_err());
/// ```
pub fn parse(input: &str) -> Result<TimeOfDay, ParseError> {
    let fields = match_colon(input)
        .or_else(|| match_compact(input))
        .ok_or_else(|| ParseError::InvalidFormat(input.to_string()))?;

    TimeOfDay::from_hms(
        digits_value(fields.hours),
        digits_value(fields.minutes),
        fields.seconds.map_or(0, digits_value),
    )
}

/// `H{1,2}:MM(:SS)?`
fn match_colon(input: &str) -> Option<Fields<'_>> {
    let mut parts = input.split(':');
    let hours = parts.next()?;
    let minutes = parts.next()?;
    let seconds = parts.next();
    if parts.next().is_some() {
        return None;
    }

    let hours_ok = (1..=2).contains(&hours.len()) && is_digits(hours);
    let minutes_ok = is_two_digits(minutes);
    let seconds_ok = seconds.map_or(true, is_two_digits);

    (hours_ok && minutes_ok && seconds_ok).then_some(Fields {
        hours,
        minutes,
        seconds,
    })
}

/// `HHMM(SS)?`
fn match_compact(input: &str) -> Option<Fields<'_>> {
    if !is_digits(input) {
        return None;
    }

    match input.len() {
        4 => Some(Fields {
            hours: &input[..2],
            minutes: &input[2..4],
            seconds: None,
        }),
        6 => Some(Fields {
            hours: &input[..2],
            minutes: &input[2..4],
            seconds: Some(&input[4..6]),
        }),
        _ => None,
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_two_digits(s: &str) -> bool {
    s.len() == 2 && is_digits(s)
}

/// Value of an all-ASCII-digit field of at most two characters.
fn digits_value(s: &str) -> u32 {
    s.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}
