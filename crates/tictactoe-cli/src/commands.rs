use anyhow::Result;

use super::args::{Cli, Commands, ConfigCommand, PlayerArgs};
use super::handlers;
use crate::context::ExecutionContext;
use crate::logging::{self, LogTarget};

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Play {
        players: PlayerArgs::default(),
        game: None,
    });

    let interactive = matches!(command, Commands::Play { .. });
    logging::init(
        cli.log_level,
        LogTarget::resolve(cli.log_file.as_deref(), interactive),
    )?;

    let ctx = ExecutionContext::new(cli.config.as_deref(), cli.api_url.as_deref(), cli.format)?;

    match command {
        Commands::Play { players, game } => handlers::play::handle(&ctx, players, game),
        Commands::Start { players } => handlers::start::handle(&ctx, players),
        Commands::Show { game_id } => handlers::show::handle(&ctx, &game_id),
        Commands::Move { game_id, row, col } => handlers::make_move::handle(&ctx, &game_id, row, col),
        Commands::Watch { game_id } => handlers::watch::handle(&ctx, &game_id),
        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Path => handlers::config::path(&ctx),
            ConfigCommand::SetUrl { url } => handlers::config::set_url(&ctx, &url),
        },
    }
}
