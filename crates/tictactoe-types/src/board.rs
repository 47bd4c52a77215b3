use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

pub const BOARD_SIZE: usize = 3;

/// A single board cell, serialized as `""`, `"X"` or `"O"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    #[serde(rename = "")]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::X => "X",
            Cell::O => "O",
        }
    }
}

impl FromStr for Cell {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" => Ok(Cell::Empty),
            "X" => Ok(Cell::X),
            "O" => Ok(Cell::O),
            other => Err(Error::InvalidCell(other.to_string())),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Zero-based board coordinate, always inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Move by `(dr, dc)`, clamped to the grid edges.
    pub fn offset(self, dr: isize, dc: isize) -> Self {
        let clamp = |v: usize, d: isize| v.saturating_add_signed(d).min(BOARD_SIZE - 1);
        Self {
            row: clamp(self.row, dr),
            col: clamp(self.col, dc),
        }
    }
}

/// The 3x3 grid as reported by the server.
///
/// The fixed-size array makes the shape an invariant of the type: any payload
/// that reaches the controller has exactly nine cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board([[Cell; BOARD_SIZE]; BOARD_SIZE]);

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self(rows)
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.0[pos.row][pos.col]
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.0
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().flat_map(|row| row.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.cells().all(Cell::is_empty)
    }

    /// Copy with one cell replaced.
    ///
    /// Used by test backends; the client itself never edits a board.
    pub fn with(mut self, pos: Position, cell: Cell) -> Self {
        self.0[pos.row][pos.col] = cell;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_serializes_as_wire_strings() {
        let json = serde_json::to_string(&[Cell::Empty, Cell::X, Cell::O]).unwrap();
        assert_eq!(json, r#"["","X","O"]"#);
    }

    #[test]
    fn test_cell_from_str_rejects_lowercase() {
        assert_eq!("X".parse::<Cell>(), Ok(Cell::X));
        assert_eq!(
            "x".parse::<Cell>(),
            Err(Error::InvalidCell("x".to_string()))
        );
    }

    #[test]
    fn test_board_roundtrips_as_nested_arrays() {
        let board = Board::empty().with(Position::new(0, 0).unwrap(), Cell::X);
        let json = serde_json::to_value(board).unwrap();
        assert_eq!(
            json,
            serde_json::json!([["X", "", ""], ["", "", ""], ["", "", ""]])
        );
        let back: Board = serde_json::from_value(json).unwrap();
        assert_eq!(back, board);
    }

    #[test]
    fn test_board_rejects_wrong_shape_in_strict_mode() {
        let result: std::result::Result<Board, _> =
            serde_json::from_value(serde_json::json!([["", ""], ["", "", ""], ["", "", ""]]));
        assert!(result.is_err());
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(2, 2).is_ok());
        assert_eq!(
            Position::new(3, 0),
            Err(Error::OutOfBounds { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_position_offset_clamps_to_grid() {
        let origin = Position::default();
        assert_eq!(origin.offset(-1, -1), origin);
        let corner = origin.offset(5, 5);
        assert_eq!((corner.row(), corner.col()), (2, 2));
    }

    #[test]
    fn test_board_always_has_nine_cells() {
        assert_eq!(Board::empty().cells().count(), 9);
        assert!(Board::empty().is_empty());
    }
}
