pub mod board;
pub mod error;
pub mod game;
pub mod wire;

pub use board::{BOARD_SIZE, Board, Cell, Position};
pub use error::{Error, Result};
pub use game::{GameState, GameStatus, Player, Winner};
pub use wire::{MoveRequest, StartGameRequest, WireGameState};
