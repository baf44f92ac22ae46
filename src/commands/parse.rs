//! Parse subcommand handler

use anyhow::Result;

use super::parse_time;

/// Print the seconds-since-midnight value of `input`.
pub fn handle(input: &str, json: bool) -> Result<()> {
    let time = parse_time(input)?;
    if json {
        let value = serde_json::json!({
            "seconds": time.as_secs(),
            "time": time.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{} ({})", time.as_secs(), time);
    }
    Ok(())
}
