//! Property tests for parsing, offset resolution and clamping

use proptest::prelude::*;

use livejump::player::{clamp_to_safe, ClampedTo, SeekableRange, LIVE_EDGE_BUFFER};
use livejump::time::{parse, prefer_past, shortest_offset_from, TimeOfDay, SECONDS_PER_DAY};

fn time_of_day() -> impl Strategy<Value = TimeOfDay> {
    (0..SECONDS_PER_DAY).prop_map(|secs| TimeOfDay::from_secs(secs).unwrap())
}

fn range() -> impl Strategy<Value = SeekableRange> {
    (-1.0e6..1.0e6f64, 0.0..1.0e5f64)
        .prop_map(|(start, len)| SeekableRange::new(start, start + len).unwrap())
}

proptest! {
    #[test]
    fn display_parses_back(time in time_of_day()) {
        prop_assert_eq!(parse(&time.to_string()), Ok(time));
    }

    #[test]
    fn compact_form_matches_colon_form(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
        let colon = parse(&format!("{h:02}:{m:02}:{s:02}")).unwrap();
        let compact = parse(&format!("{h:02}{m:02}{s:02}")).unwrap();
        prop_assert_eq!(colon, compact);
        prop_assert_eq!(colon.as_secs(), h * 3600 + m * 60 + s);
    }

    #[test]
    fn shortest_offset_is_at_most_half_a_day(target in time_of_day(), reference in time_of_day()) {
        let offset = shortest_offset_from(target, reference);
        let day = i64::from(SECONDS_PER_DAY);

        prop_assert!(offset.abs() <= day / 2);
        prop_assert_eq!(
            (i64::from(reference.as_secs()) + offset).rem_euclid(day),
            i64::from(target.as_secs())
        );
    }

    #[test]
    fn prefer_past_never_points_forward(target in time_of_day(), reference in time_of_day()) {
        let offset = prefer_past(shortest_offset_from(target, reference), true);
        prop_assert!(offset <= 0);
        prop_assert!(offset > -i64::from(SECONDS_PER_DAY));
    }

    #[test]
    fn clamped_position_is_always_safe(range in range(), requested in -2.0e6..2.0e6f64) {
        let (position, clamped_to) = clamp_to_safe(range, requested);

        prop_assert!(position >= range.start);
        prop_assert!(position <= range.safe_end());
        prop_assert!(position <= (range.end - LIVE_EDGE_BUFFER).max(range.start));
        prop_assert_eq!(clamped_to.is_none(), position == requested);
        if clamped_to == Some(ClampedTo::End) {
            prop_assert!(requested > range.end);
        }
    }

    #[test]
    fn non_finite_requests_land_on_a_boundary(
        range in range(),
        requested in prop_oneof![Just(f64::NAN), Just(f64::INFINITY), Just(f64::NEG_INFINITY)],
    ) {
        let (position, clamped_to) = clamp_to_safe(range, requested);

        prop_assert!(position.is_finite());
        prop_assert!(position >= range.start && position <= range.safe_end());
        let expected = if requested == f64::INFINITY {
            ClampedTo::End
        } else {
            ClampedTo::Start
        };
        prop_assert_eq!(clamped_to, Some(expected));
    }
}
