use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Cell, Position};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Player {
    #[default]
    X,
    O,
}

impl Player {
    pub fn as_str(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }

    pub fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "X" => Ok(Player::X),
            "O" => Ok(Player::O),
            other => Err(Error::InvalidPlayer(other.to_string())),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle of a game as seen by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// No game started yet
    #[default]
    Idle,
    InProgress,
    Finished,
    /// A start call failed; cleared by the next successful start
    Error,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Idle => "idle",
            GameStatus::InProgress => "in_progress",
            GameStatus::Finished => "finished",
            GameStatus::Error => "error",
        }
    }

    /// Parse a server status string. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "idle" => Some(GameStatus::Idle),
            "in_progress" => Some(GameStatus::InProgress),
            "finished" => Some(GameStatus::Finished),
            "error" => Some(GameStatus::Error),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    X,
    O,
    #[serde(rename = "draw")]
    Draw,
}

impl Winner {
    pub fn as_str(&self) -> &'static str {
        match self {
            Winner::X => "X",
            Winner::O => "O",
            Winner::Draw => "draw",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "X" => Some(Winner::X),
            "O" => Some(Winner::O),
            "draw" => Some(Winner::Draw),
            _ => None,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Player> for Winner {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Winner::X,
            Player::O => Winner::O,
        }
    }
}

/// Full server-reported snapshot of one game.
///
/// The client replaces this wholesale on every successful response and never
/// derives any field from the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub game_id: String,
    pub board: Board,
    pub next_player: Player,
    pub status: GameStatus,
    #[serde(default)]
    pub winner: Option<Winner>,
}

impl GameState {
    /// Placeholder shown before any game has been started.
    pub fn idle() -> Self {
        Self {
            game_id: String::new(),
            board: Board::empty(),
            next_player: Player::X,
            status: GameStatus::Idle,
            winner: None,
        }
    }

    pub fn has_game(&self) -> bool {
        !self.game_id.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress && self.has_game()
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.board.get(pos)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::idle()
    }
}
