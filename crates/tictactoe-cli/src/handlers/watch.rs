use anyhow::{Result, bail};
use tictactoe_runtime::{GameController, GameDriver, Outcome, RuntimeEvent};
use tictactoe_types::GameState;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::context::ExecutionContext;
use crate::presentation::ConsoleGameView;
use crate::types::OutputFormat;

pub fn handle(ctx: &ExecutionContext, game_id: &str) -> Result<()> {
    let api = ctx.api()?;
    let runtime = ctx.runtime()?;
    let console = ctx.console();

    let (driver, rx) = GameDriver::new(api, runtime.handle().clone(), GameController::new());
    runtime.block_on(follow(driver, rx, game_id, &console))
}

/// Join `game_id`, then print every new snapshot the poller brings in until
/// the game leaves `in_progress`.
async fn follow(
    mut driver: GameDriver,
    mut rx: UnboundedReceiver<RuntimeEvent>,
    game_id: &str,
    console: &ConsoleGameView,
) -> Result<()> {
    driver.join_game(game_id);
    let mut last_printed: Option<GameState> = None;

    while let Some(event) = rx.recv().await {
        let outcome = driver.handle_event(event);
        if let Some(Outcome::Failed(message)) = &outcome {
            bail!("{}", message);
        }

        let game = &driver.state().game;
        if outcome == Some(Outcome::Applied) && last_printed.as_ref() != Some(game) {
            if last_printed.is_some() && console.format() == OutputFormat::Plain {
                println!();
            }
            println!("{}", console.game_update(game)?);
            last_printed = Some(game.clone());
        }

        if !driver.state().is_loading() && !driver.controller().should_poll() {
            break;
        }
    }

    if last_printed.is_none() {
        bail!("The server returned no game state for watch");
    }
    Ok(())
}
