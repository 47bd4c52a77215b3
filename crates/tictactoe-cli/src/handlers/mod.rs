pub mod config;
pub mod make_move;
pub mod play;
pub mod show;
pub mod start;
pub mod watch;

use anyhow::{Result, anyhow};
use tictactoe_types::GameState;

/// One-shot commands have nothing to show for an empty or non-JSON body.
fn require_state(state: Option<GameState>, call: &str) -> Result<GameState> {
    state.ok_or_else(|| anyhow!("The server returned no game state for {}", call))
}
