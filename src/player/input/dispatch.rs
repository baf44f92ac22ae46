//! Command dispatch.
//!
//! Turns named commands into engine calls using the configured step sizes,
//! and drops seek shortcuts while the user is typing or an ad is playing.

use crate::config::{Config, ConfigError, SeekMinutes};
use crate::player::playback::{jump_to_time, Anchor, SeekEngine};
use crate::player::source::PlayerPage;
use crate::player::state::SeekResult;
use crate::time::{Clock, ReferenceClock, SystemClock, TimeOfDay};

use super::{Command, DispatchResult, FocusProbe, SeekCommand, SuppressReason, UnknownCommand};

/// Routes commands to a [`SeekEngine`].
///
/// Starts with default settings; [`apply_settings`](Self::apply_settings)
/// replaces them once the settings store has been read.
#[derive(Debug, Clone)]
pub struct Dispatcher<C = SystemClock> {
    minutes: SeekMinutes,
    auto_yesterday: bool,
    anchor: Anchor,
    clock: ReferenceClock<C>,
}

impl Dispatcher<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(ReferenceClock::default())
    }
}

impl Default for Dispatcher<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Dispatcher<C> {
    pub fn with_clock(clock: ReferenceClock<C>) -> Self {
        Self {
            minutes: SeekMinutes::default(),
            auto_yesterday: true,
            anchor: Anchor::default(),
            clock,
        }
    }

    /// Take over loaded settings.
    ///
    /// Fails without changing anything if the configured timezone is unknown.
    pub fn apply_settings(&mut self, config: &Config) -> Result<(), ConfigError> {
        let timezone = config.timezone()?;
        self.clock.set_timezone(timezone);
        self.minutes = config.seek_minutes.sanitized();
        self.auto_yesterday = config.jump.auto_yesterday;
        self.anchor = config.jump.anchor;
        tracing::debug!(
            short = self.minutes.short,
            medium = self.minutes.medium,
            long = self.minutes.long,
            auto_yesterday = self.auto_yesterday,
            timezone = %timezone,
            "settings applied"
        );
        Ok(())
    }

    pub fn seek_minutes(&self) -> SeekMinutes {
        self.minutes
    }

    pub fn auto_yesterday(&self) -> bool {
        self.auto_yesterday
    }

    /// Jump command for `target` using the configured prefer-past setting.
    pub fn jump_command(&self, target: TimeOfDay) -> Command {
        Command::JumpToTime {
            target,
            prefer_past: self.auto_yesterday,
        }
    }

    /// Execute `command` against `engine`.
    ///
    /// Seek shortcuts are suppressed while an editable element has focus or
    /// an ad is playing. Timestamp jumps are explicit requests and always run.
    pub fn handle<P: PlayerPage + FocusProbe>(
        &self,
        engine: &mut SeekEngine<P>,
        command: Command,
    ) -> DispatchResult {
        match command {
            Command::Seek(seek) => {
                if let Some(reason) = suppression(engine) {
                    tracing::debug!(command = seek.name(), ?reason, "seek command suppressed");
                    return DispatchResult::Suppressed(reason);
                }
                let delta = seek.delta_secs(&self.minutes);
                DispatchResult::Seeked(engine.relative_seek(delta).into())
            }
            Command::JumpToTime {
                target,
                prefer_past,
            } => {
                let result: SeekResult =
                    jump_to_time(engine, &self.clock, target, prefer_past, self.anchor).into();
                if let Some(error) = result.error {
                    tracing::warn!(%target, error = error.name(), "time jump failed");
                }
                DispatchResult::Seeked(result)
            }
        }
    }

    /// Parse and execute a named seek command.
    pub fn handle_named<P: PlayerPage + FocusProbe>(
        &self,
        engine: &mut SeekEngine<P>,
        name: &str,
    ) -> Result<DispatchResult, UnknownCommand> {
        let command: SeekCommand = name.parse()?;
        Ok(self.handle(engine, command.into()))
    }
}

fn suppression<P: PlayerPage + FocusProbe>(engine: &SeekEngine<P>) -> Option<SuppressReason> {
    if engine.page().editable_focused() {
        Some(SuppressReason::EditableFocus)
    } else if engine.is_ad_playing() {
        Some(SuppressReason::AdPlaying)
    } else {
        None
    }
}
