use anyhow::Result;
use tictactoe_client::GameApi;

use super::require_state;
use crate::args::PlayerArgs;
use crate::context::ExecutionContext;

pub fn handle(ctx: &ExecutionContext, players: PlayerArgs) -> Result<()> {
    let (player_x, player_o) = ctx.players(players.player_x, players.player_o);
    let api = ctx.api()?;
    let runtime = ctx.runtime()?;

    let state = runtime.block_on(api.start_game(&player_x, &player_o))?;
    let game = require_state(state, "start")?;
    tracing::info!(game_id = %game.game_id, "game started");

    println!("{}", ctx.console().game(&game)?);
    Ok(())
}
