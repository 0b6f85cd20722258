use std::fmt;
use std::str::FromStr;

use super::error::BoardError;

/// A cell the active player moves to, addressed as (row, col).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Move {
    pub row: u8,
    pub col: u8,
}

impl Move {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the cell offset by (d_row, d_col) if it stays inside a
    /// `width` x `height` board.
    pub fn offset(&self, d_row: i8, d_col: i8, width: u8, height: u8) -> Option<Move> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if row < 0 || col < 0 || row >= height as i16 || col >= width as i16 {
            return None;
        }
        Some(Move::new(row as u8, col as u8))
    }

    pub fn manhattan_distance(&self, other: &Move) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(u8, u8)> for Move {
    fn from((row, col): (u8, u8)) -> Self {
        Move::new(row, col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Writes `(-1, -1)` for the "no move" sentinel, as the game rules expect.
pub struct DisplayMove(pub Option<Move>);

impl fmt::Display for DisplayMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(mv) => write!(f, "{}", mv),
            None => write!(f, "(-1, -1)"),
        }
    }
}

impl FromStr for Move {
    type Err = BoardError;

    /// Accepts `row,col` with optional whitespace and parentheses.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parse_error = || BoardError::MoveParseError {
            input: input.to_string(),
        };
        let trimmed = input
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let (row, col) = trimmed.split_once(',').ok_or_else(parse_error)?;
        let row = row.trim().parse::<u8>().map_err(|_| parse_error())?;
        let col = col.trim().parse::<u8>().map_err(|_| parse_error())?;
        Ok(Move::new(row, col))
    }
}
