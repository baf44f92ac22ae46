//! Subcommand handlers and the helpers they share.

pub mod completions;
pub mod config;
pub mod jump;
pub mod offset;
pub mod parse;
pub mod seek;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use livejump::cli::{ClockArgs, StreamArgs};
use livejump::player::{SeekOutcome, SimulatedPage, SimulatedStream};
use livejump::time::{parse, FixedClock, ReferenceClock, TimeOfDay};
use livejump::Config;

/// Config file location: `--config`, else the default.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}

/// Load settings, warning about anything suspicious.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = config_path(explicit)?;
    let config = Config::load_from(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    for warning in config.validate() {
        tracing::warn!("{}", warning);
    }
    Ok(config)
}

/// Parse user-typed time input, ignoring surrounding whitespace.
pub fn parse_time(input: &str) -> Result<TimeOfDay> {
    Ok(parse(input.trim())?)
}

/// Reference clock for `args`, falling back to the config's timezone.
///
/// The clock is frozen at `--at`, or at the moment of the call.
pub fn reference_clock(args: &ClockArgs, config: &Config) -> Result<ReferenceClock<FixedClock>> {
    let timezone: Tz = match &args.timezone {
        Some(name) => name
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown timezone '{}'", name))?,
        None => config.timezone()?,
    };
    let now = args
        .at
        .map(|at| at.with_timezone(&Utc))
        .unwrap_or_else(Utc::now);
    Ok(ReferenceClock::with_clock(timezone, FixedClock(now)))
}

/// Whether future times are read as yesterday.
pub fn auto_yesterday(args: &ClockArgs, config: &Config) -> bool {
    !args.no_auto_yesterday && config.jump.auto_yesterday
}

/// Build the simulated page described by `args`.
///
/// Without `--position` the viewer is watching live, i.e. sitting at the
/// safe end of the range.
pub fn build_page(args: &StreamArgs) -> SimulatedPage {
    if args.no_video {
        return SimulatedPage {
            ad_showing: args.ad,
            ..SimulatedPage::empty()
        };
    }

    let range = args.range.range();
    let position = args
        .position
        .or_else(|| range.map(|r| r.safe_end()))
        .unwrap_or(0.0);

    SimulatedPage {
        media: Some(SimulatedStream::new(range, position)),
        ad_showing: args.ad,
        editable_focused: false,
    }
}

/// `2025-06-01 14:00:00 +02:00`
pub fn format_instant(instant: &DateTime<Tz>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S %:z").to_string()
}

/// Print a labelled line in the shared two-column layout.
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("{:<10} {}", label, value);
}

/// Print the position change of an applied seek.
pub fn print_outcome(before: f64, outcome: &SeekOutcome) {
    print_field("position", format!("{} -> {}", before, outcome.position));
}
