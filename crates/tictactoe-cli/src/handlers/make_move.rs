use anyhow::Result;
use tictactoe_client::GameApi;
use tictactoe_types::Position;

use super::require_state;
use crate::context::ExecutionContext;

pub fn handle(ctx: &ExecutionContext, game_id: &str, row: usize, col: usize) -> Result<()> {
    // Out-of-range cells never reach the server.
    let position = Position::new(row, col)?;
    let api = ctx.api()?;
    let runtime = ctx.runtime()?;

    let state = runtime.block_on(api.make_move(game_id, position.row(), position.col()))?;
    let game = require_state(state, "move")?;

    println!("{}", ctx.console().game(&game)?);
    Ok(())
}
