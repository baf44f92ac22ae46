//! Playback logic for live streams.
//!
//! This module handles clamped seeking and wall-clock time jumps.

mod jump;
mod seeking;

pub use jump::{jump_to_time, plan_jump, Anchor, JumpPlan};
pub use seeking::{clamp_to_safe, SeekEngine};
