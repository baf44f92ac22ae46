//! Jump subcommand handler

use std::path::Path;

use anyhow::{bail, Result};

use livejump::cli::{ClockArgs, StreamArgs};
use livejump::player::{jump_to_time, plan_jump, Anchor, SeekEngine, SeekResult};

use super::seek::print_json;
use super::{
    auto_yesterday, build_page, format_instant, load_config, parse_time, print_field,
    print_outcome, reference_clock,
};

/// Jump the simulated stream to `input` on the reference clock.
pub fn handle(
    input: &str,
    stream: &StreamArgs,
    args: &ClockArgs,
    anchor: Option<Anchor>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let target = parse_time(input)?;
    let clock = reference_clock(args, &config)?;
    let prefer_yesterday = auto_yesterday(args, &config);
    let anchor = anchor.unwrap_or(config.jump.anchor);

    let mut engine = SeekEngine::new(build_page(stream));
    let before = engine.current_position();

    let plan = plan_jump(&engine, &clock, target, prefer_yesterday, anchor);
    let result = jump_to_time(&mut engine, &clock, target, prefer_yesterday, anchor);
    let after = engine.current_position();

    if json {
        print_json(&SeekResult::from(result), after)?;
    } else {
        print_field("target", target);
        if let Ok(plan) = &plan {
            print_field("reference", format_instant(&plan.reference));
            print_field(
                "anchor",
                format!("{} @ {}", plan.anchor.name(), plan.anchor_position),
            );
            print_field("offset", format!("{:+}", plan.offset));
        }
        if let (Some(before), Ok(outcome)) = (before, &result) {
            print_outcome(before, outcome);
        }
        print_field("result", SeekResult::from(result).message());
    }

    if let Err(error) = result {
        bail!("seek failed: {}", error.name());
    }
    Ok(())
}
