use thiserror::Error;

use super::position::Move;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Board dimensions must be between 1x1 and 8x8, got {width}x{height}")]
    InvalidDimensions { width: u8, height: u8 },
    #[error("{mv} is not a legal move in this position")]
    IllegalMove { mv: Move },
    #[error("Cannot parse move {input:?}, expected `row,col`")]
    MoveParseError { input: String },
    #[error("Invalid board layout: {msg}")]
    InvalidLayoutError { msg: &'static str },
}
