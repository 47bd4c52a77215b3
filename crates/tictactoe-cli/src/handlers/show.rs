use anyhow::Result;
use tictactoe_client::GameApi;

use super::require_state;
use crate::context::ExecutionContext;

pub fn handle(ctx: &ExecutionContext, game_id: &str) -> Result<()> {
    let api = ctx.api()?;
    let runtime = ctx.runtime()?;

    let state = runtime.block_on(api.get_game_state(game_id))?;
    let game = require_state(state, "show")?;

    println!("{}", ctx.console().game(&game)?);
    Ok(())
}
