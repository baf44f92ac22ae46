//! Jumping to a wall-clock time in the reference timezone.
//!
//! The stream's live edge corresponds to "now" on the reference clock, so
//! the media position of clock time `T` is `live_edge + offset(T)`.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::player::source::PlayerPage;
use crate::player::state::{SeekError, SeekOutcome};
use crate::time::{prefer_past, shortest_offset, Clock, ReferenceClock, TimeOfDay};

use super::seeking::SeekEngine;

/// Which media position a wall-clock jump is measured from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// The live edge, paired with the live-edge instant
    #[default]
    LiveEdge,
    /// The current playback position, paired with the current instant
    CurrentPosition,
}

impl Anchor {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LiveEdge => "live-edge",
            Self::CurrentPosition => "current-position",
        }
    }
}

impl std::str::FromStr for Anchor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "live-edge" => Ok(Self::LiveEdge),
            "current-position" => Ok(Self::CurrentPosition),
            other => Err(format!(
                "unknown anchor '{other}' (expected live-edge or current-position)"
            )),
        }
    }
}

/// A computed jump, before it is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpPlan {
    pub target: TimeOfDay,
    pub anchor: Anchor,
    /// Instant on the reference clock that `anchor_position` corresponds to
    pub reference: DateTime<Tz>,
    /// Media position the offset is added to
    pub anchor_position: f64,
    /// Signed offset in seconds, after the prefer-past adjustment
    pub offset: i64,
}

impl JumpPlan {
    /// Unclamped media position of the target time.
    pub fn position(&self) -> f64 {
        self.anchor_position + self.offset as f64
    }
}

/// Work out where `target` lies on the media timeline without seeking.
pub fn plan_jump<P: PlayerPage, C: Clock>(
    engine: &SeekEngine<P>,
    clock: &ReferenceClock<C>,
    target: TimeOfDay,
    prefer_yesterday: bool,
    anchor: Anchor,
) -> Result<JumpPlan, SeekError> {
    let current = engine.current_position().ok_or(SeekError::VideoNotFound)?;
    let live_edge = engine.live_edge_time().ok_or(SeekError::NotSeekable)?;

    let (reference, anchor_position) = match anchor {
        Anchor::LiveEdge => (clock.live_edge_instant(), live_edge),
        Anchor::CurrentPosition => (clock.now(), current),
    };
    let offset = prefer_past(shortest_offset(target, &reference), prefer_yesterday);

    Ok(JumpPlan {
        target,
        anchor,
        reference,
        anchor_position,
        offset,
    })
}

/// Seek the page to `target` on the reference clock.
pub fn jump_to_time<P: PlayerPage, C: Clock>(
    engine: &mut SeekEngine<P>,
    clock: &ReferenceClock<C>,
    target: TimeOfDay,
    prefer_yesterday: bool,
    anchor: Anchor,
) -> Result<SeekOutcome, SeekError> {
    let plan = plan_jump(engine, clock, target, prefer_yesterday, anchor)?;
    tracing::debug!(
        target = %plan.target,
        anchor = plan.anchor.name(),
        reference = %plan.reference,
        offset = plan.offset,
        "wall-clock jump planned"
    );

    match plan.anchor {
        Anchor::LiveEdge => engine.absolute_seek(plan.position()),
        Anchor::CurrentPosition => engine.relative_seek(plan.offset as f64),
    }
}
