//! Board and state builders.
//!
//! Boards are written as three strings of `X`, `O` and `.`:
//!
//! ```
//! use tictactoe_testing::fixtures::board;
//! let b = board(["X..", ".O.", "..."]);
//! assert_eq!(b.cells().filter(|c| !c.is_empty()).count(), 2);
//! ```

use tictactoe_types::{Board, Cell, GameState, GameStatus, Player, Winner};

pub fn board(rows: [&str; 3]) -> Board {
    let mut cells = [[Cell::Empty; 3]; 3];
    for (r, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), 3, "fixture row {r} must have 3 cells: {row:?}");
        for (c, ch) in row.chars().enumerate() {
            cells[r][c] = match ch {
                'X' => Cell::X,
                'O' => Cell::O,
                '.' => Cell::Empty,
                other => panic!("unknown fixture cell {other:?}"),
            };
        }
    }
    Board::from_rows(cells)
}

pub fn in_progress(game_id: &str, rows: [&str; 3], next_player: Player) -> GameState {
    GameState {
        game_id: game_id.to_string(),
        board: board(rows),
        next_player,
        status: GameStatus::InProgress,
        winner: None,
    }
}

pub fn new_game(game_id: &str) -> GameState {
    in_progress(game_id, ["...", "...", "..."], Player::X)
}

pub fn finished(game_id: &str, rows: [&str; 3], winner: Winner) -> GameState {
    GameState {
        game_id: game_id.to_string(),
        board: board(rows),
        next_player: Player::X,
        status: GameStatus::Finished,
        winner: Some(winner),
    }
}

/// JSON body exactly as a conforming backend would send it.
pub fn json_body(state: &GameState) -> serde_json::Value {
    serde_json::to_value(state).expect("GameState serializes")
}
