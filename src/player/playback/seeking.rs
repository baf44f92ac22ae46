//! Seek engine for live streams.
//!
//! Every seek reads the seekable range and playback position from the page,
//! computes a clamped target and writes it back in one step. Nothing is
//! cached between calls because the live edge keeps moving.

use crate::player::source::{MediaSource, PlayerPage};
use crate::player::state::{ClampedTo, SeekError, SeekOutcome, SeekableRange};

/// Clamp `requested` into the part of `range` that is safe to seek to.
///
/// Returns the position to apply and, if it differs from `requested`,
/// which boundary it was clamped to:
///
/// - before `range.start`, or NaN → `start`
/// - past `range.end` → `safe_end()`, classified `End`
/// - inside the buffer before `range.end` → `safe_end()`, classified `LiveEdge`
pub fn clamp_to_safe(range: SeekableRange, requested: f64) -> (f64, Option<ClampedTo>) {
    if requested.is_nan() || requested < range.start {
        (range.start, Some(ClampedTo::Start))
    } else if requested > range.safe_end() {
        let to = if requested > range.end {
            ClampedTo::End
        } else {
            ClampedTo::LiveEdge
        };
        (range.safe_end(), Some(to))
    } else {
        (requested, None)
    }
}

/// Executes seeks against a player page.
#[derive(Debug)]
pub struct SeekEngine<P> {
    page: P,
}

impl<P: PlayerPage> SeekEngine<P> {
    pub fn new(page: P) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn into_inner(self) -> P {
        self.page
    }

    /// Seek by `delta` seconds from the current position.
    pub fn relative_seek(&mut self, delta: f64) -> Result<SeekOutcome, SeekError> {
        self.seek_with(|current| current + delta)
    }

    /// Seek to `target` seconds on the media timeline.
    pub fn absolute_seek(&mut self, target: f64) -> Result<SeekOutcome, SeekError> {
        self.seek_with(|_| target)
    }

    /// Position of the live broadcast, i.e. the end of the seekable range.
    ///
    /// `None` when there is no video or its range is empty.
    pub fn live_edge_time(&self) -> Option<f64> {
        self.page
            .media()
            .and_then(|media| media.seekable_range())
            .map(|range| range.end)
    }

    /// Current playback position, `None` without a video.
    pub fn current_position(&self) -> Option<f64> {
        self.page.media().map(|media| media.current_position())
    }

    /// Whether an ad is playing. Callers suppress seek commands while it is.
    pub fn is_ad_playing(&self) -> bool {
        self.page.ad_overlay_present()
    }

    /// Read range and position, compute the target, clamp and write it.
    fn seek_with(&mut self, target: impl FnOnce(f64) -> f64) -> Result<SeekOutcome, SeekError> {
        let media = self.page.media_mut().ok_or(SeekError::VideoNotFound)?;
        let range = media.seekable_range().ok_or(SeekError::NotSeekable)?;

        let requested = target(media.current_position());
        let (position, clamped_to) = clamp_to_safe(range, requested);
        media.set_position(position);

        tracing::debug!(
            requested,
            position,
            range_start = range.start,
            range_end = range.end,
            clamped_to = clamped_to.map(|to| to.name()),
            "seek applied"
        );

        Ok(SeekOutcome {
            requested,
            position,
            clamped_to,
        })
    }
}
