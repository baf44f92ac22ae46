//! Seek types shared across player modules.
//!
//! Contains the seekable window reported by the media source and the
//! result types produced by every seek call.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Seconds kept clear of the live edge.
///
/// Many live players stop or error when asked to seek onto the exact end of
/// the seekable range, so seeks never land closer to it than this.
pub const LIVE_EDGE_BUFFER: f64 = 3.0;

/// The interval the media source currently allows seeking into.
///
/// Read fresh on every seek; the live edge keeps moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekableRange {
    /// Earliest seekable position in seconds
    pub start: f64,
    /// Latest seekable position in seconds (the live edge)
    pub end: f64,
}

impl SeekableRange {
    /// Create a range, `None` unless both ends are finite and `start <= end`.
    pub fn new(start: f64, end: f64) -> Option<Self> {
        (start.is_finite() && end.is_finite() && start <= end)
            .then_some(Self { start, end })
    }

    /// Latest position a seek may land on.
    pub fn safe_end(&self) -> f64 {
        self.start.max(self.end - LIVE_EDGE_BUFFER)
    }
}

impl fmt::Display for SeekableRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Error parsing a `START..END` range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid seekable range '{0}' (expected START..END with START <= END)")]
pub struct RangeParseError(pub String);

impl FromStr for SeekableRange {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || RangeParseError(s.to_string());
        let (start, end) = s.split_once("..").ok_or_else(err)?;
        let start: f64 = start.trim().parse().map_err(|_| err())?;
        let end: f64 = end.trim().parse().map_err(|_| err())?;
        Self::new(start, end).ok_or_else(err)
    }
}

/// Where a clamped seek ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClampedTo {
    /// Requested position was before the seekable range
    Start,
    /// Requested position was past the end of the seekable range
    End,
    /// Requested position was inside the buffer before the live edge
    LiveEdge,
}

impl ClampedTo {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::LiveEdge => "live-edge",
        }
    }
}

/// Why a seek could not be performed.
///
/// Neither failure touches the media position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "kebab-case")]
pub enum SeekError {
    #[error("No video element found on the page")]
    VideoNotFound,

    #[error("Video is not seekable (empty seekable range)")]
    NotSeekable,
}

impl SeekError {
    pub fn name(&self) -> &'static str {
        match self {
            Self::VideoNotFound => "video-not-found",
            Self::NotSeekable => "not-seekable",
        }
    }
}

/// A seek that was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekOutcome {
    /// Position requested before clamping
    pub requested: f64,
    /// Position written to the media source
    pub position: f64,
    /// Set when `position` differs from `requested`
    pub clamped_to: Option<ClampedTo>,
}

impl SeekOutcome {
    pub fn is_clamped(&self) -> bool {
        self.clamped_to.is_some()
    }
}

/// Flat result descriptor handed back to UI callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeekResult {
    pub success: bool,
    pub clamped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clamped_to: Option<ClampedTo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SeekError>,
}

impl SeekResult {
    pub fn failed(error: SeekError) -> Self {
        Self {
            success: false,
            clamped: false,
            clamped_to: None,
            error: Some(error),
        }
    }

    /// Short human description, e.g. `clamped to live-edge`.
    pub fn message(&self) -> String {
        match (self.error, self.clamped_to) {
            (Some(error), _) => format!("seek failed: {}", error.name()),
            (None, Some(to)) => format!("clamped to {}", to.name()),
            (None, None) => "ok".to_string(),
        }
    }
}

impl From<SeekOutcome> for SeekResult {
    fn from(outcome: SeekOutcome) -> Self {
        Self {
            success: true,
            clamped: outcome.is_clamped(),
            clamped_to: outcome.clamped_to,
            error: None,
        }
    }
}

impl From<Result<SeekOutcome, SeekError>> for SeekResult {
    fn from(result: Result<SeekOutcome, SeekError>) -> Self {
        match result {
            Ok(outcome) => outcome.into(),
            Err(error) => Self::failed(error),
        }
    }
}
