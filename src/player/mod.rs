//! Live-stream seeking
//!
//! Moves a live stream's playback position by relative steps or to a
//! wall-clock time, never leaving the seekable range and never landing in
//! the last few seconds before the live edge.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: Seekable range, seek outcome and result types
//! - `source`: Traits for the hosting page and its media element
//! - `playback/`: Seek engine and wall-clock time jumps
//! - `input/`: Named seek commands and their dispatch
//! - `simulated`: In-memory page and stream
//!
//! # Usage
//!
//! ```
//! use livejump::player::{ClampedTo, SeekEngine, SimulatedPage, SimulatedStream};
//!
//! let page = SimulatedPage::with_stream(SimulatedStream::live(0.0, 3600.0, 3590.0));
//! let mut engine = SeekEngine::new(page);
//!
//! let outcome = engine.relative_seek(10.0).unwrap();
//! assert_eq!(outcome.clamped_to, Some(ClampedTo::LiveEdge));
//! assert_eq!(outcome.position, 3597.0);
//! ```

pub mod input;
pub mod playback;
mod simulated;
mod source;
pub mod state;

pub use input::{Command, DispatchResult, Dispatcher, FocusProbe, SeekCommand, SuppressReason};
pub use playback::{clamp_to_safe, jump_to_time, plan_jump, Anchor, JumpPlan, SeekEngine};
pub use simulated::{SimulatedPage, SimulatedStream};
pub use source::{MediaSource, PlayerPage};
pub use state::{
    ClampedTo, SeekError, SeekOutcome, SeekResult, SeekableRange, LIVE_EDGE_BUFFER,
};
