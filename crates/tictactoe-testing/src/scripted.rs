use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use tictactoe_client::{ApiError, GameApi, Result};
use tictactoe_types::GameState;

/// A call observed by [`ScriptedApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Start { player_x: String, player_o: String },
    Get { game_id: String },
    Move { game_id: String, row: usize, col: usize },
}

/// In-memory `GameApi` returning queued results in order, whatever the call.
///
/// When the queue runs dry every call fails with a transport error, which makes
/// unexpected calls visible in assertions on [`ScriptedApi::calls`].
#[derive(Default)]
pub struct ScriptedApi {
    responses: Mutex<VecDeque<Result<Option<GameState>>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, state: GameState) -> &Self {
        self.push(Ok(Some(state)))
    }

    pub fn respond_empty(&self) -> &Self {
        self.push(Ok(None))
    }

    pub fn fail_http(&self, status: u16, message: &str) -> &Self {
        self.push(Err(ApiError::Http {
            status,
            code: None,
            message: message.to_string(),
        }))
    }

    pub fn fail_transport(&self, message: &str) -> &Self {
        self.push(Err(ApiError::Transport(message.to_string())))
    }

    pub fn push(&self, result: Result<Option<GameState>>) -> &Self {
        self.responses.lock().unwrap().push_back(result);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }

    fn next(&self, call: Call) -> Result<Option<GameState>> {
        self.calls.lock().unwrap().push(call);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}

#[async_trait]
impl GameApi for ScriptedApi {
    async fn start_game(&self, player_x: &str, player_o: &str) -> Result<Option<GameState>> {
        self.next(Call::Start {
            player_x: player_x.to_string(),
            player_o: player_o.to_string(),
        })
    }

    async fn get_game_state(&self, game_id: &str) -> Result<Option<GameState>> {
        self.next(Call::Get {
            game_id: game_id.to_string(),
        })
    }

    async fn make_move(&self, game_id: &str, row: usize, col: usize) -> Result<Option<GameState>> {
        self.next(Call::Move {
            game_id: game_id.to_string(),
            row,
            col,
        })
    }
}
