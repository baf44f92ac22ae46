//! Seek subcommand handler

use std::path::Path;

use anyhow::{bail, Result};

use livejump::cli::StreamArgs;
use livejump::player::{
    DispatchResult, Dispatcher, SeekCommand, SeekEngine, SeekResult, SuppressReason,
};

use super::{build_page, load_config, print_field};

/// Dispatch a named seek command against the simulated stream.
pub fn handle(
    name: &str,
    stream: &StreamArgs,
    focused: bool,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let command: SeekCommand = name.parse()?;
    let config = load_config(config_path)?;

    let mut dispatcher = Dispatcher::new();
    dispatcher.apply_settings(&config)?;

    let mut page = build_page(stream);
    page.editable_focused = focused;
    let before = page.position();

    let mut engine = SeekEngine::new(page);
    let dispatched = dispatcher.handle(&mut engine, command.into());
    let after = engine.page().position();

    match dispatched {
        DispatchResult::Suppressed(reason) => {
            let reason = match reason {
                SuppressReason::EditableFocus => "editable-focus",
                SuppressReason::AdPlaying => "ad-playing",
            };
            if json {
                let value = serde_json::json!({ "suppressed": reason, "position": after });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print_field("command", command);
                print_field("suppressed", reason);
            }
            Ok(())
        }
        DispatchResult::Seeked(result) => {
            if json {
                print_json(&result, after)?;
            } else {
                print_field("command", command);
                print_field(
                    "delta",
                    format!("{:+}", command.delta_secs(&dispatcher.seek_minutes())),
                );
                if let (Some(before), Some(after)) = (before, after) {
                    print_field("position", format!("{} -> {}", before, after));
                }
                print_field("result", result.message());
            }
            if !result.success {
                bail!("{}", result.message());
            }
            Ok(())
        }
    }
}

/// `{"result": {...}, "position": ...}`
pub fn print_json(result: &SeekResult, position: Option<f64>) -> Result<()> {
    let value = serde_json::json!({ "result": result, "position": position });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
