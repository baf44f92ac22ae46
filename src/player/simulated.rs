//! In-memory live stream and player page.
//!
//! Stands in for a browser video element: the CLI drives seeks against it
//! and tests use it to observe exactly what the engine wrote.

use super::input::FocusProbe;
use super::source::{MediaSource, PlayerPage};
use super::state::SeekableRange;

/// A live stream with a DVR window.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedStream {
    /// Current playback position in seconds
    pub position: f64,
    /// Seekable window; `None` models an empty range
    pub range: Option<SeekableRange>,
    /// Number of position writes received
    pub writes: usize,
}

impl SimulatedStream {
    pub fn new(range: Option<SeekableRange>, position: f64) -> Self {
        Self {
            position,
            range,
            writes: 0,
        }
    }

    /// Stream whose window is `start..end`, playing at `position`.
    ///
    /// An inverted window is treated as empty.
    pub fn live(start: f64, end: f64, position: f64) -> Self {
        Self::new(SeekableRange::new(start, end), position)
    }

    /// Let `seconds` of broadcast pass.
    ///
    /// The window slides forward and playback advances with it.
    pub fn advance(&mut self, seconds: f64) {
        if let Some(range) = self.range.as_mut() {
            range.start += seconds;
            range.end += seconds;
        }
        self.position += seconds;
    }
}

impl MediaSource for SimulatedStream {
    fn current_position(&self) -> f64 {
        self.position
    }

    fn seekable_range(&self) -> Option<SeekableRange> {
        self.range
    }

    fn set_position(&mut self, position: f64) {
        self.position = position;
        self.writes += 1;
    }
}

/// A page with an optional stream, an ad flag and a focus flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulatedPage {
    pub media: Option<SimulatedStream>,
    pub ad_showing: bool,
    pub editable_focused: bool,
}

impl SimulatedPage {
    pub fn with_stream(stream: SimulatedStream) -> Self {
        Self {
            media: Some(stream),
            ..Self::default()
        }
    }

    /// A page with no video element at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Playback position of the stream, if there is one.
    pub fn position(&self) -> Option<f64> {
        self.media.as_ref().map(|m| m.position)
    }
}

impl PlayerPage for SimulatedPage {
    type Media = SimulatedStream;

    fn media(&self) -> Option<&SimulatedStream> {
        self.media.as_ref()
    }

    fn media_mut(&mut self) -> Option<&mut SimulatedStream> {
        self.media.as_mut()
    }

    fn ad_overlay_present(&self) -> bool {
        self.ad_showing
    }
}

impl FocusProbe for SimulatedPage {
    fn editable_focused(&self) -> bool {
        self.editable_focused
    }
}
