//! Command-line interface definitions.
//!
//! Lives in the library so `xtask` can render the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use clap::{Args, Parser, Subcommand};

use crate::player::state::RangeParseError;
use crate::player::{Anchor, SeekableRange};

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("VERGEN_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "livejump",
    version,
    long_version = LONG_VERSION,
    about = "Seek live streams to a wall-clock time without leaving the seekable window"
)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a wall-clock time (HH:MM, HH:MM:SS, HHMM, HHMMSS) into seconds since midnight
    Parse {
        /// Time to parse
        time: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the signed offset from the reference clock to a wall-clock time
    Offset {
        /// Target time of day
        time: String,

        #[command(flatten)]
        clock: ClockArgs,
    },

    /// Run a named seek shortcut against a simulated live stream
    Seek {
        /// Command name, e.g. seek-backward-10min or seek-forward-60min
        command: String,

        #[command(flatten)]
        stream: StreamArgs,

        /// Simulate keyboard focus in a text field
        #[arg(long)]
        focused: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Jump a simulated live stream to a wall-clock time
    Jump {
        /// Target time of day on the reference clock
        time: String,

        #[command(flatten)]
        stream: StreamArgs,

        #[command(flatten)]
        clock: ClockArgs,

        /// Position the jump is measured from: live-edge or current-position
        #[arg(long, value_name = "ANCHOR")]
        anchor: Option<Anchor>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Open the config file in $EDITOR
    Edit,
}

/// Reference clock options.
#[derive(Debug, Clone, Args)]
pub struct ClockArgs {
    /// Use this instant (RFC 3339) as "now" instead of the system clock
    #[arg(long, value_name = "INSTANT")]
    pub at: Option<DateTime<FixedOffset>>,

    /// Reference timezone (IANA name), overriding the config
    #[arg(long, value_name = "TZ")]
    pub timezone: Option<String>,

    /// Keep future times in the future instead of reading them as yesterday
    #[arg(long)]
    pub no_auto_yesterday: bool,
}

/// Simulated stream options.
#[derive(Debug, Clone, Args)]
pub struct StreamArgs {
    /// Seekable range in seconds as START..END, or "none" for an empty range
    #[arg(long, value_name = "START..END", default_value = "0..14400")]
    pub range: RangeArg,

    /// Playback position in seconds [default: just behind the live edge]
    #[arg(
        long,
        value_name = "SECONDS",
        allow_negative_numbers = true,
        value_parser = parse_seconds
    )]
    pub position: Option<f64>,

    /// Simulate a page without a video element
    #[arg(long)]
    pub no_video: bool,

    /// Simulate an ad overlay
    #[arg(long)]
    pub ad: bool,
}

/// A seekable range given on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeArg {
    Empty,
    Range(SeekableRange),
}

impl RangeArg {
    pub fn range(self) -> Option<SeekableRange> {
        match self {
            Self::Empty => None,
            Self::Range(range) => Some(range),
        }
    }
}

impl FromStr for RangeArg {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "empty" => Ok(Self::Empty),
            _ => s.parse().map(Self::Range),
        }
    }
}

/// A finite number of seconds.
fn parse_seconds(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(secs) if secs.is_finite() => Ok(secs),
        _ => Err(format!("'{s}' is not a finite number of seconds")),
    }
}
