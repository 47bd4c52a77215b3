//! Request bodies and the lenient response shape.
//!
//! Servers are not trusted to send a complete payload. Every response field is
//! optional here and `WireGameState::into_state` fills gaps with safe defaults,
//! so a `GameState` always upholds the 3x3 board invariant.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::board::{BOARD_SIZE, Board, Cell};
use crate::game::{GameState, GameStatus, Player, Winner};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartGameRequest {
    pub player_x: String,
    pub player_o: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WireGameState {
    #[serde(default)]
    pub game_id: Option<Value>,
    #[serde(default)]
    pub board: Option<Value>,
    #[serde(default)]
    pub next_player: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub winner: Option<Value>,
}

impl WireGameState {
    /// Parse a success body. Empty, non-JSON and non-object bodies yield `None`.
    pub fn parse(body: &[u8]) -> Option<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        match serde_json::from_slice::<Value>(body) {
            Ok(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
            Ok(_) | Err(_) => None,
        }
    }

    /// Normalize into a `GameState`.
    ///
    /// `fallback_status` is used when the status is missing or unrecognized.
    pub fn into_state(self, fallback_status: GameStatus) -> GameState {
        let game_id = match self.game_id {
            Some(Value::String(id)) => id,
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Null) | None => String::new(),
            Some(other) => {
                tracing::warn!(game_id = %other, "ignoring non-scalar game_id");
                String::new()
            }
        };

        let board = self.board.map(normalize_board).unwrap_or_default();

        let next_player = text_field("next_player", self.next_player);
        let status = text_field("status", self.status);
        let winner = text_field("winner", self.winner);

        let next_player = match next_player.as_deref() {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(next_player = raw, "unknown next_player, defaulting to X");
                Player::X
            }),
            None => Player::X,
        };

        let status = match status.as_deref() {
            Some(raw) => GameStatus::parse(raw).unwrap_or_else(|| {
                tracing::warn!(status = raw, fallback = %fallback_status, "unknown status");
                fallback_status
            }),
            None => fallback_status,
        };

        let winner = winner.as_deref().and_then(|raw| {
            let parsed = Winner::parse(raw);
            if parsed.is_none() && !raw.is_empty() {
                tracing::warn!(winner = raw, "unknown winner value");
            }
            parsed
        });

        GameState {
            game_id,
            board,
            next_player,
            status,
            winner,
        }
    }
}

/// String content of an enum-like field. Anything else is dropped so the
/// rest of the payload still applies.
fn text_field(name: &str, value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Null) | None => None,
        Some(other) => {
            tracing::warn!(field = name, value = %other, "ignoring non-string field");
            None
        }
    }
}

fn normalize_board(value: Value) -> Board {
    let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    let Value::Array(rows) = value else {
        if !value.is_null() {
            tracing::warn!("board is not an array, using an empty board");
        }
        return Board::from_rows(cells);
    };

    if rows.len() != BOARD_SIZE {
        tracing::warn!(rows = rows.len(), "board has wrong row count");
    }

    for (r, row) in rows.into_iter().take(BOARD_SIZE).enumerate() {
        let Value::Array(row) = row else {
            tracing::warn!(row = r, "board row is not an array");
            continue;
        };
        if row.len() != BOARD_SIZE {
            tracing::warn!(row = r, cols = row.len(), "board row has wrong length");
        }
        for (c, cell) in row.into_iter().take(BOARD_SIZE).enumerate() {
            cells[r][c] = match cell {
                Value::String(s) => s.parse().unwrap_or_else(|_| {
                    tracing::warn!(row = r, col = c, value = %s, "unknown cell value");
                    Cell::Empty
                }),
                Value::Null => Cell::Empty,
                other => {
                    tracing::warn!(row = r, col = c, value = %other, "unknown cell value");
                    Cell::Empty
                }
            };
        }
    }

    Board::from_rows(cells)
}
