//! Wall-clock time handling.
//!
//! - `parser`: Free-form `HH:MM[:SS]` / `HHMM[SS]` input to [`TimeOfDay`]
//! - `reference`: "Now" in a fixed reference timezone and the shortest
//!   signed offset between two times of day
//!
//! Everything in here is pure apart from [`SystemClock`], which reads the
//! host clock.

mod parser;
mod reference;

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Timelike};

pub use parser::{parse, ParseError};
pub use reference::{
    prefer_past, shortest_offset, shortest_offset_from, Clock, FixedClock, ReferenceClock,
    SystemClock, DEFAULT_TIMEZONE,
};

/// Seconds in one day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Seconds since local midnight, always in `[0, 86400)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Wrap a raw seconds-of-day value; `None` when it is a full day or more.
    pub fn from_secs(secs: u32) -> Option<Self> {
        (secs < SECONDS_PER_DAY).then_some(Self(secs))
    }

    /// Build from clock fields, rejecting out-of-range values the same way
    /// the parser does.
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Result<Self, ParseError> {
        if hours >= 24 || minutes >= 60 || seconds >= 60 {
            return Err(ParseError::InvalidValue {
                hours,
                minutes,
                seconds,
            });
        }
        Ok(Self(hours * 3600 + minutes * 60 + seconds))
    }

    /// Seconds since midnight of `instant`, read on its own wall clock.
    pub fn of<T: TimeZone>(instant: &DateTime<T>) -> Self {
        Self(instant.time().num_seconds_from_midnight())
    }

    pub fn as_secs(self) -> u32 {
        self.0
    }

    pub fn hours(self) -> u32 {
        self.0 / 3600
    }

    pub fn minutes(self) -> u32 {
        self.0 % 3600 / 60
    }

    pub fn seconds(self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
