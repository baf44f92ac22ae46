//! Command input for the player.
//!
//! Named seek commands arrive from keyboard shortcuts, timestamp jumps from
//! the jump form. Both are dispatched against a [`SeekEngine`](crate::player::SeekEngine)
//! by the [`Dispatcher`].

mod dispatch;

use std::fmt;
use std::str::FromStr;

pub use dispatch::Dispatcher;

use crate::config::SeekMinutes;
use crate::player::state::SeekResult;
use crate::time::TimeOfDay;

/// Reports whether keyboard focus is in an editable element.
///
/// Shortcuts typed into a text field must not seek the video.
pub trait FocusProbe {
    fn editable_focused(&self) -> bool;
}

/// The six named seek shortcuts.
///
/// Names are fixed; the step sizes come from [`SeekMinutes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeekCommand {
    BackwardShort,
    BackwardMedium,
    BackwardLong,
    ForwardShort,
    ForwardMedium,
    ForwardLong,
}

impl SeekCommand {
    pub const ALL: [SeekCommand; 6] = [
        Self::BackwardShort,
        Self::BackwardMedium,
        Self::BackwardLong,
        Self::ForwardShort,
        Self::ForwardMedium,
        Self::ForwardLong,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::BackwardShort => "seek-backward-10min",
            Self::BackwardMedium => "seek-backward-30min",
            Self::BackwardLong => "seek-backward-60min",
            Self::ForwardShort => "seek-forward-10min",
            Self::ForwardMedium => "seek-forward-30min",
            Self::ForwardLong => "seek-forward-60min",
        }
    }

    /// Signed seek distance in seconds.
    pub fn delta_secs(&self, minutes: &SeekMinutes) -> f64 {
        let magnitude = match self {
            Self::BackwardShort | Self::ForwardShort => minutes.short,
            Self::BackwardMedium | Self::ForwardMedium => minutes.medium,
            Self::BackwardLong | Self::ForwardLong => minutes.long,
        };
        let secs = f64::from(magnitude) * 60.0;
        if self.is_backward() {
            -secs
        } else {
            secs
        }
    }

    pub fn is_backward(&self) -> bool {
        matches!(
            self,
            Self::BackwardShort | Self::BackwardMedium | Self::BackwardLong
        )
    }
}

impl fmt::Display for SeekCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A command name that is not one of the known seek commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown command '{0}' (expected one of: seek-backward-10min, seek-backward-30min, seek-backward-60min, seek-forward-10min, seek-forward-30min, seek-forward-60min)")]
pub struct UnknownCommand(pub String);

impl FromStr for SeekCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

/// Everything the dispatcher can be asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Relative seek by a configured number of minutes
    Seek(SeekCommand),
    /// Jump to a wall-clock time on the reference clock
    JumpToTime {
        target: TimeOfDay,
        prefer_past: bool,
    },
}

impl From<SeekCommand> for Command {
    fn from(command: SeekCommand) -> Self {
        Self::Seek(command)
    }
}

/// Why a command was not executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    /// An input, textarea or contenteditable element has focus
    EditableFocus,
    /// An ad is playing
    AdPlaying,
}

/// Result of dispatching one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// The engine ran; the seek itself may still have failed
    Seeked(SeekResult),
    /// The command was dropped before reaching the engine
    Suppressed(SuppressReason),
}

impl DispatchResult {
    /// The seek result, if the engine ran.
    pub fn seek_result(&self) -> Option<SeekResult> {
        match self {
            Self::Seeked(result) => Some(*result),
            Self::Suppressed(_) => None,
        }
    }
}
