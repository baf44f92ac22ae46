mod commands;

use anyhow::Result;
use clap::Parser;

use livejump::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    livejump::logging::init(cli.verbose);

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Parse { time, json } => commands::parse::handle(&time, json),
        Commands::Offset { time, clock } => commands::offset::handle(&time, &clock, config_path),
        Commands::Seek {
            command,
            stream,
            focused,
            json,
        } => commands::seek::handle(&command, &stream, focused, json, config_path),
        Commands::Jump {
            time,
            stream,
            clock,
            anchor,
            json,
        } => commands::jump::handle(&time, &stream, &clock, anchor, json, config_path),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config_path),
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(config_path, force),
            ConfigCommands::Edit => commands::config::handle_edit(config_path),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
