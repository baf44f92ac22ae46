//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use super::{config_path, load_config};

/// Show current configuration as TOML.
pub fn handle_show(explicit: Option<&Path>) -> Result<()> {
    let config = load_config(explicit)?;
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print where the config file is read from.
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    println!("{}", config_path(explicit)?.display());
    Ok(())
}

/// Write the default configuration.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn handle_init(explicit: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path(explicit)?;
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    livejump::Config::default().save_to(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

/// Open configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(explicit: Option<&Path>) -> Result<()> {
    let path = config_path(explicit)?;

    if !path.exists() {
        livejump::Config::default().save_to(&path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!("Opening {} with {}", path.display(), editor);

    let status = std::process::Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;
    if !status.success() {
        bail!("{} exited with {}", editor, status);
    }

    // Surface mistakes made in the editor right away
    load_config(Some(&path))?;
    Ok(())
}
