//! livejump - seek live streams to a wall-clock time
//!
//! Converts a time typed by the user ("14:30") on a fixed reference clock
//! into a position on a live stream's timeline, and clamps every seek into
//! the part of the seekable range that is safe to play from.
//!
//! - [`time`]: Parsing times of day and resolving offsets against a reference clock
//! - [`player`]: Seek engine, time jumps and command dispatch
//! - [`config`]: Persistent settings

pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod time;

pub use config::Config;
