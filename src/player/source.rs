//! Boundary between the seek engine and the hosting player page.
//!
//! The engine only ever reads the playback position and seekable range,
//! writes a new position, and asks whether an ad is showing. Everything else
//! on the page belongs to the UI layer.

use super::state::SeekableRange;

/// A media element that can report and change its playback position.
pub trait MediaSource {
    /// Current playback position in seconds.
    fn current_position(&self) -> f64;

    /// Seekable window, `None` when the element reports an empty range.
    fn seekable_range(&self) -> Option<SeekableRange>;

    /// Move playback to `position` seconds.
    fn set_position(&mut self, position: f64);
}

/// A player page that may or may not currently host a media element.
pub trait PlayerPage {
    type Media: MediaSource;

    /// The attached media element, if any.
    fn media(&self) -> Option<&Self::Media>;

    /// Mutable access to the attached media element, if any.
    fn media_mut(&mut self) -> Option<&mut Self::Media>;

    /// Whether an ad overlay is currently shown.
    fn ad_overlay_present(&self) -> bool;
}

impl<P: PlayerPage + ?Sized> PlayerPage for &mut P {
    type Media = P::Media;

    fn media(&self) -> Option<&Self::Media> {
        (**self).media()
    }

    fn media_mut(&mut self) -> Option<&mut Self::Media> {
        (**self).media_mut()
    }

    fn ad_overlay_present(&self) -> bool {
        (**self).ad_overlay_present()
    }
}
