//! Offset subcommand handler

use std::path::Path;

use anyhow::Result;

use livejump::cli::ClockArgs;
use livejump::time::{prefer_past, shortest_offset};

use super::{auto_yesterday, format_instant, load_config, parse_time, print_field, reference_clock};

/// Show how far `input` is from the reference clock's current time.
pub fn handle(input: &str, args: &ClockArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let target = parse_time(input)?;
    let clock = reference_clock(args, &config)?;
    let prefer_yesterday = auto_yesterday(args, &config);

    let reference = clock.now();
    let shortest = shortest_offset(target, &reference);
    let offset = prefer_past(shortest, prefer_yesterday);

    print_field("target", target);
    print_field(
        "reference",
        format!("{} ({})", format_instant(&reference), clock.timezone().name()),
    );
    print_field("shortest", format!("{:+}", shortest));
    print_field(
        "offset",
        format!(
            "{:+}{}",
            offset,
            if offset != shortest { " (yesterday)" } else { "" }
        ),
    );
    Ok(())
}
