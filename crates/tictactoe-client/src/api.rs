use async_trait::async_trait;
use std::sync::Arc;
use tictactoe_types::GameState;

use crate::Result;

/// The three calls the game service exposes.
///
/// `Ok(None)` means the server answered 2xx with an empty or non-JSON body.
#[async_trait]
pub trait GameApi: Send + Sync {
    async fn start_game(&self, player_x: &str, player_o: &str) -> Result<Option<GameState>>;

    async fn get_game_state(&self, game_id: &str) -> Result<Option<GameState>>;

    async fn make_move(&self, game_id: &str, row: usize, col: usize) -> Result<Option<GameState>>;
}

#[async_trait]
impl<T: GameApi + ?Sized> GameApi for Arc<T> {
    async fn start_game(&self, player_x: &str, player_o: &str) -> Result<Option<GameState>> {
        (**self).start_game(player_x, player_o).await
    }

    async fn get_game_state(&self, game_id: &str) -> Result<Option<GameState>> {
        (**self).get_game_state(game_id).await
    }

    async fn make_move(&self, game_id: &str, row: usize, col: usize) -> Result<Option<GameState>> {
        (**self).make_move(game_id, row, col).await
    }
}
