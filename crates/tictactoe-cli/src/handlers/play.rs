use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use tictactoe_runtime::{GameController, GameDriver};

use crate::args::PlayerArgs;
use crate::context::ExecutionContext;
use crate::presentation::renderers::tui::{Opening, TuiGameView};

pub fn handle(ctx: &ExecutionContext, players: PlayerArgs, game: Option<String>) -> Result<()> {
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        bail!("play needs an interactive terminal; use start, show and move for scripting");
    }

    let (player_x, player_o) = ctx.players(players.player_x, players.player_o);
    let api = ctx.api()?;
    let runtime = ctx.runtime()?;

    let controller = GameController::with_theme(ctx.config().theme);
    let (driver, rx) = GameDriver::new(api, runtime.handle().clone(), controller);
    let opening = match game {
        Some(game_id) => Opening::Join(game_id),
        None => Opening::NewGame,
    };

    TuiGameView::new(driver, rx, player_x, player_o).run(opening)
}
