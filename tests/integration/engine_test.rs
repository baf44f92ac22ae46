//! Seek engine, time jumps and dispatch through the public API

use chrono::{TimeZone, Utc};

use livejump::config::{Config, SeekMinutes};
use livejump::player::{
    jump_to_time, Anchor, ClampedTo, Command, DispatchResult, Dispatcher, MediaSource,
    PlayerPage, SeekCommand, SeekEngine, SeekError, SeekableRange, SimulatedPage,
    SimulatedStream, SuppressReason,
};
use livejump::time::{parse, FixedClock, ReferenceClock, DEFAULT_TIMEZONE};

/// Reference clock at 14:00 CEST.
fn afternoon() -> ReferenceClock<FixedClock> {
    ReferenceClock::with_clock(
        DEFAULT_TIMEZONE,
        FixedClock(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
    )
}

/// Four-hour DVR window, watching live.
fn live_page() -> SimulatedPage {
    SimulatedPage::with_stream(SimulatedStream::live(0.0, 14_400.0, 14_397.0))
}

// ============================================================================
// A hand-written page
// ============================================================================

/// Media element whose window is reported by the page itself.
struct Element {
    time: f64,
    window: (f64, f64),
}

impl MediaSource for Element {
    fn current_position(&self) -> f64 {
        self.time
    }

    fn seekable_range(&self) -> Option<SeekableRange> {
        SeekableRange::new(self.window.0, self.window.1)
    }

    fn set_position(&mut self, position: f64) {
        self.time = position;
    }
}

struct Page {
    video: Option<Element>,
}

impl PlayerPage for Page {
    type Media = Element;

    fn media(&self) -> Option<&Element> {
        self.video.as_ref()
    }

    fn media_mut(&mut self) -> Option<&mut Element> {
        self.video.as_mut()
    }

    fn ad_overlay_present(&self) -> bool {
        false
    }
}

#[test]
fn engine_works_with_any_page() {
    let mut page = Page {
        video: Some(Element {
            time: 500.0,
            window: (100.0, 1000.0),
        }),
    };

    let outcome = SeekEngine::new(&mut page).relative_seek(-600.0).unwrap();
    assert_eq!(outcome.position, 100.0);
    assert_eq!(outcome.clamped_to, Some(ClampedTo::Start));
    assert_eq!(page.video.as_ref().unwrap().time, 100.0);
}

#[test]
fn page_without_video_reports_not_found() {
    let mut engine = SeekEngine::new(Page { video: None });
    assert_eq!(engine.absolute_seek(0.0), Err(SeekError::VideoNotFound));
    assert_eq!(engine.live_edge_time(), None);
}

// ============================================================================
// Clamping
// ============================================================================

#[test]
fn never_lands_in_live_edge_buffer() {
    let mut engine = SeekEngine::new(live_page());
    for target in [14_397.5, 14_399.0, 14_400.0, 20_000.0] {
        let outcome = engine.absolute_seek(target).unwrap();
        assert_eq!(outcome.position, 14_397.0, "target {target}");
        assert!(outcome.is_clamped());
    }
}

#[test]
fn moving_window_is_read_on_every_seek() {
    let mut engine = SeekEngine::new(live_page());
    engine.relative_seek(-600.0).unwrap();

    engine.page_mut().media.as_mut().unwrap().advance(60.0);

    // The window is now 60..14460
    let outcome = engine.relative_seek(10_000.0).unwrap();
    assert_eq!(outcome.position, 14_457.0);
    assert_eq!(outcome.clamped_to, Some(ClampedTo::End));
}

#[test]
fn unknown_playback_position_never_reaches_the_player() {
    let mut page = Page {
        video: Some(Element {
            time: f64::NAN,
            window: (100.0, 1000.0),
        }),
    };

    let outcome = SeekEngine::new(&mut page).relative_seek(600.0).unwrap();
    assert_eq!(outcome.clamped_to, Some(ClampedTo::Start));
    assert_eq!(page.video.as_ref().unwrap().time, 100.0);
}

#[test]
fn failed_seek_writes_nothing() {
    let mut engine = SeekEngine::new(SimulatedPage::with_stream(SimulatedStream::new(None, 42.0)));
    assert_eq!(engine.relative_seek(60.0), Err(SeekError::NotSeekable));

    let stream = engine.into_inner().media.unwrap();
    assert_eq!(stream.position, 42.0);
    assert_eq!(stream.writes, 0);
}

// ============================================================================
// Time jumps
// ============================================================================

#[test]
fn jump_lands_at_matching_wall_clock_position() {
    let mut engine = SeekEngine::new(live_page());
    let target = parse("12:15").unwrap();

    let outcome = jump_to_time(&mut engine, &afternoon(), target, true, Anchor::LiveEdge).unwrap();
    // 1h45m before the live edge
    assert_eq!(outcome.position, 14_400.0 - 6_300.0);
    assert!(!outcome.is_clamped());
}

#[test]
fn repeated_jumps_are_stable() {
    let mut engine = SeekEngine::new(live_page());
    let clock = afternoon();
    let target = parse("13:00").unwrap();

    let first = jump_to_time(&mut engine, &clock, target, true, Anchor::LiveEdge).unwrap();
    let second = jump_to_time(&mut engine, &clock, target, true, Anchor::LiveEdge).unwrap();
    assert_eq!(first.position, second.position);
}

#[test]
fn current_position_anchor_drifts_with_playback() {
    let mut engine = SeekEngine::new(live_page());
    let clock = afternoon();
    let target = parse("13:00").unwrap();

    let first = jump_to_time(&mut engine, &clock, target, true, Anchor::CurrentPosition).unwrap();
    let second = jump_to_time(&mut engine, &clock, target, true, Anchor::CurrentPosition).unwrap();
    assert_eq!(first.position, 14_397.0 - 3_600.0);
    assert_eq!(second.position, first.position - 3_600.0);
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn every_named_command_moves_by_its_step() {
    let dispatcher = Dispatcher::with_clock(afternoon());
    let minutes = SeekMinutes::default();

    for command in SeekCommand::ALL {
        let mut engine = SeekEngine::new(SimulatedPage::with_stream(SimulatedStream::live(
            0.0, 14_400.0, 7_200.0,
        )));
        let result = dispatcher
            .handle_named(&mut engine, command.name())
            .unwrap();

        assert_eq!(result.seek_result().map(|r| r.success), Some(true));
        assert_eq!(
            engine.current_position(),
            Some(7_200.0 + command.delta_secs(&minutes)),
            "{command}"
        );
    }
}

#[test]
fn settings_change_step_sizes() {
    let mut dispatcher = Dispatcher::with_clock(afternoon());
    let config = Config::from_toml("[seek_minutes]\nshort = 1\nmedium = 2\nlong = 3\n").unwrap();
    dispatcher.apply_settings(&config).unwrap();

    let mut engine = SeekEngine::new(live_page());
    dispatcher.handle(&mut engine, SeekCommand::BackwardLong.into());
    assert_eq!(engine.current_position(), Some(14_397.0 - 180.0));
}

#[test]
fn focus_suppresses_shortcuts_but_not_jumps() {
    let dispatcher = Dispatcher::with_clock(afternoon());
    let mut page = live_page();
    page.editable_focused = true;
    let mut engine = SeekEngine::new(page);

    let shortcut = dispatcher.handle(&mut engine, SeekCommand::BackwardShort.into());
    assert_eq!(
        shortcut,
        DispatchResult::Suppressed(SuppressReason::EditableFocus)
    );
    assert_eq!(engine.current_position(), Some(14_397.0));

    let jump = dispatcher.handle(&mut engine, dispatcher.jump_command(parse("13:30").unwrap()));
    assert!(jump.seek_result().unwrap().success);
    assert_eq!(engine.current_position(), Some(12_600.0));
}

#[test]
fn jump_without_video_is_reported() {
    let dispatcher = Dispatcher::with_clock(afternoon());
    let mut engine = SeekEngine::new(SimulatedPage::empty());

    let result = dispatcher
        .handle(
            &mut engine,
            Command::JumpToTime {
                target: parse("10:00").unwrap(),
                prefer_past: true,
            },
        )
        .seek_result()
        .unwrap();
    assert!(!result.success);
    assert_eq!(result.error, Some(SeekError::VideoNotFound));
}
