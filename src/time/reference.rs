//! Reference time resolution.
//!
//! A live broadcast is labelled in the wall-clock time of a fixed
//! geographic zone. Jumping to "14:30" means finding how far 14:30 on that
//! zone's clock is from a reference instant (now, or the live edge), taking
//! the shorter way round the 24-hour dial.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::{TimeOfDay, SECONDS_PER_DAY};

/// Zone that stream wall-clock times are given in unless configured otherwise.
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Amsterdam;

const DAY: i64 = SECONDS_PER_DAY as i64;

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The host clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Shortest signed offset in seconds from `reference` to `target` on a
/// 24-hour dial.
///
/// Positive means `target` lies ahead of `reference`. When both directions
/// are exactly 12 hours the direct difference `target - reference` wins.
pub fn shortest_offset<T: TimeZone>(target: TimeOfDay, reference: &DateTime<T>) -> i64 {
    shortest_offset_from(target, TimeOfDay::of(reference))
}

/// [`shortest_offset`] on plain seconds-of-day values.
pub fn shortest_offset_from(target: TimeOfDay, reference: TimeOfDay) -> i64 {
    let forward = i64::from(target.as_secs()) - i64::from(reference.as_secs());
    let backward = if forward >= 0 {
        forward - DAY
    } else {
        forward + DAY
    };

    if forward.abs() <= backward.abs() {
        forward
    } else {
        backward
    }
}

/// Reinterpret a strictly-future offset as the same clock time yesterday.
///
/// A live broadcast already in progress has usually *passed* the requested
/// clock time, so a positive offset is pulled back one day when `enabled`.
pub fn prefer_past(offset: i64, enabled: bool) -> i64 {
    if enabled && offset > 0 {
        offset - DAY
    } else {
        offset
    }
}

/// A [`Clock`] bound to the zone that stream times are read in.
#[derive(Debug, Clone)]
pub struct ReferenceClock<C = SystemClock> {
    timezone: Tz,
    clock: C,
}

impl ReferenceClock<SystemClock> {
    pub fn new(timezone: Tz) -> Self {
        Self::with_clock(timezone, SystemClock)
    }
}

impl Default for ReferenceClock<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl<C: Clock> ReferenceClock<C> {
    pub fn with_clock(timezone: Tz, clock: C) -> Self {
        Self { timezone, clock }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn set_timezone(&mut self, timezone: Tz) {
        self.timezone = timezone;
    }

    /// Current instant on the reference zone's wall clock.
    ///
    /// The zone is a named one, so daylight-saving transitions are followed.
    pub fn now(&self) -> DateTime<Tz> {
        self.clock.now().with_timezone(&self.timezone)
    }

    /// Wall-clock instant of the stream's live edge.
    ///
    /// The live edge of a broadcast is what is happening right now, so this
    /// is the same instant as [`now`](Self::now). It is kept separate so the
    /// two anchors read distinctly at call sites.
    pub fn live_edge_instant(&self) -> DateTime<Tz> {
        self.now()
    }

    /// Offset from now to `target`, optionally preferring yesterday.
    pub fn offset_to(&self, target: TimeOfDay, prefer_yesterday: bool) -> i64 {
        prefer_past(shortest_offset(target, &self.now()), prefer_yesterday)
    }
}
