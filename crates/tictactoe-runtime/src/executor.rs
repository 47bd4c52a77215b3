use tictactoe_client::GameApi;

use crate::controller::{Request, RequestKind, Response};

/// Run one request against `api`. A single attempt; failures are carried in
/// the response rather than returned.
pub async fn execute<A>(api: &A, request: Request) -> Response
where
    A: GameApi + ?Sized,
{
    let result = match &request.kind {
        RequestKind::Start { player_x, player_o } => api.start_game(player_x, player_o).await,
        RequestKind::Join { game_id } | RequestKind::Poll { game_id } => {
            api.get_game_state(game_id).await
        }
        RequestKind::Move { game_id, position } => {
            api.make_move(game_id, position.row(), position.col()).await
        }
    };
    Response {
        seq: request.seq,
        kind: request.kind,
        result,
    }
}
