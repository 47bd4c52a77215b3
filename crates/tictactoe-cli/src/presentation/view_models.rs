//! Text shared by the console output and the TUI.

use serde::Serialize;
use tictactoe_runtime::Action;
use tictactoe_types::{Board, Cell, GameState, GameStatus, Winner};

pub fn status_line(game: &GameState) -> String {
    match game.status {
        GameStatus::InProgress => format!("Next turn: {}", game.next_player),
        GameStatus::Finished => match game.winner {
            Some(Winner::Draw) => "Draw".to_string(),
            Some(winner) => format!("Winner: {}", winner),
            None => "Game over".to_string(),
        },
        GameStatus::Idle => "No game in progress".to_string(),
        GameStatus::Error => "Something went wrong".to_string(),
    }
}

pub fn loading_label(action: Action) -> &'static str {
    match action {
        Action::Start => "Starting game...",
        Action::Join => "Loading game...",
        Action::Move => "Placing mark...",
    }
}

/// One character per cell, `.` for empty.
pub fn cell_symbol(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => ".",
        Cell::X => "X",
        Cell::O => "O",
    }
}

pub fn board_rows(board: &Board) -> Vec<[&'static str; 3]> {
    board
        .rows()
        .iter()
        .map(|row| [cell_symbol(row[0]), cell_symbol(row[1]), cell_symbol(row[2])])
        .collect()
}

/// JSON shape for one-shot output: the server snapshot plus the rendered status.
#[derive(Debug, Serialize)]
pub struct GameViewModel<'a> {
    #[serde(flatten)]
    pub game: &'a GameState,
    pub status_line: String,
}

impl<'a> GameViewModel<'a> {
    pub fn new(game: &'a GameState) -> Self {
        Self {
            game,
            status_line: status_line(game),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_types::Player;

    fn with_status(status: GameStatus, winner: Option<Winner>) -> GameState {
        GameState {
            game_id: "g1".into(),
            status,
            winner,
            next_player: Player::O,
            ..GameState::default()
        }
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(
            status_line(&with_status(GameStatus::InProgress, None)),
            "Next turn: O"
        );
        assert_eq!(
            status_line(&with_status(GameStatus::Finished, Some(Winner::X))),
            "Winner: X"
        );
        assert_eq!(
            status_line(&with_status(GameStatus::Finished, Some(Winner::Draw))),
            "Draw"
        );
        assert_eq!(
            status_line(&with_status(GameStatus::Finished, None)),
            "Game over"
        );
        assert_eq!(status_line(&GameState::idle()), "No game in progress");
        assert_eq!(
            status_line(&with_status(GameStatus::Error, None)),
            "Something went wrong"
        );
    }

    #[test]
    fn test_json_view_flattens_game() {
        let game = with_status(GameStatus::InProgress, None);
        let value = serde_json::to_value(GameViewModel::new(&game)).unwrap();
        assert_eq!(value["game_id"], "g1");
        assert_eq!(value["status"], "in_progress");
        assert_eq!(value["status_line"], "Next turn: O");
        assert_eq!(value["board"][0][0], "");
    }
}
