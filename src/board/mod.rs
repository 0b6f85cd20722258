pub mod error;
pub mod player;
pub mod position;

mod display;


use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use smallvec::SmallVec;

use crate::search::GameState;

pub use error::BoardError;
pub use player::Player;
pub use position::{DisplayMove, Move};

pub const DEFAULT_WIDTH: u8 = 7;
pub const DEFAULT_HEIGHT: u8 = 7;
/// Cells are tracked in a u64, one bit per cell.
pub const MAX_DIMENSION: u8 = 8;

/// Players move like chess knights once they are on the board.
const KNIGHT_DIRECTIONS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub type MoveList = SmallVec<[Move; 8]>;

/// An Isolation position. Every cell a player has occupied stays blocked for
/// the rest of the game; a player's first move may go to any blank cell, and
/// later moves are knight jumps onto blank cells. The player to move with no
/// legal moves loses.
///
/// Positions are immutable snapshots for the searchers: `forecast` returns a
/// new board and leaves `self` untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    blocked: u64,
    locations: [Option<Move>; 2],
    active: Player,
    move_count: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            blocked: 0,
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }
}

impl Board {
    pub fn new(width: u8, height: u8) -> Result<Self, BoardError> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            ..Self::default()
        })
    }

    /// Builds a position from text rows: `.` blank, `#` blocked, `1`/`2` the
    /// current location of each player (also blocked).
    pub fn from_rows(rows: &[&str], active: Player) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width > MAX_DIMENSION as usize || height > MAX_DIMENSION as usize {
            return Err(BoardError::InvalidDimensions {
                width: u8::try_from(width).unwrap_or(u8::MAX),
                height: u8::try_from(height).unwrap_or(u8::MAX),
            });
        }
        let width = width as u8;
        let mut board = Self::new(width, height as u8)?;
        board.active = active;

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width as usize {
                return Err(BoardError::InvalidLayoutError {
                    msg: "rows must all have the same width",
                });
            }
            for (col, c) in line.chars().enumerate() {
                let cell = Move::new(row as u8, col as u8);
                match c {
                    '.' => continue,
                    '#' => {}
                    '1' | '2' => {
                        let player = if c == '1' { Player::One } else { Player::Two };
                        if board.locations[player.index()].is_some() {
                            return Err(BoardError::InvalidLayoutError {
                                msg: "each player can appear at most once",
                            });
                        }
                        board.locations[player.index()] = Some(cell);
                    }
                    _ => {
                        return Err(BoardError::InvalidLayoutError {
                            msg: "cells must be one of `.`, `#`, `1`, `2`",
                        })
                    }
                }
                board.blocked |= board.bit(cell);
                board.move_count += 1;
            }
        }

        Ok(board)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn move_count(&self) -> u16 {
        self.move_count
    }

    pub fn active(&self) -> Player {
        self.active
    }

    pub fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
    }

    pub fn contains(&self, cell: Move) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    pub fn is_blank(&self, cell: Move) -> bool {
        self.contains(cell) && self.blocked & self.bit(cell) == 0
    }

    pub fn blank_cells(&self) -> MoveList {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| Move::new(row, col)))
            .filter(|&cell| self.is_blank(cell))
            .collect()
    }

    /// Moves available to `player`, whether or not it is their turn.
    pub fn moves_for(&self, player: Player) -> MoveList {
        match self.locations[player.index()] {
            None => self.blank_cells(),
            Some(from) => KNIGHT_DIRECTIONS
                .iter()
                .filter_map(|&(d_row, d_col)| from.offset(d_row, d_col, self.width, self.height))
                .filter(|&cell| self.is_blank(cell))
                .collect(),
        }
    }

    /// Plays `mv` for the active player after checking it is legal.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.moves_for(self.active).contains(&mv) {
            return Err(BoardError::IllegalMove { mv });
        }
        *self = self.forecast(&mv);
        Ok(())
    }

    #[inline]
    fn bit(&self, cell: Move) -> u64 {
        1u64 << (cell.row as u32 * self.width as u32 + cell.col as u32)
    }
}

impl GameState for Board {
    type Move = Move;
    type Player = Player;
    type MoveList = MoveList;

    #[inline]
    fn legal_moves_for(&self, player: Player) -> MoveList {
        self.moves_for(player)
    }

    /// Assumes `mv` is legal for the active player.
    fn forecast(&self, mv: &Move) -> Self {
        let mut next = self.clone();
        next.blocked |= self.bit(*mv);
        next.locations[self.active.index()] = Some(*mv);
        next.active = self.active.opponent();
        next.move_count += 1;
        next
    }

    #[inline]
    fn active_player(&self) -> Player {
        self.active
    }

    #[inline]
    fn inactive_player(&self) -> Player {
        self.active.opponent()
    }

    #[inline]
    fn opponent(&self, player: Player) -> Player {
        player.opponent()
    }

    fn position_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.width.hash(&mut hasher);
        self.height.hash(&mut hasher);
        self.blocked.hash(&mut hasher);
        self.locations.hash(&mut hasher);
        self.active.hash(&mut hasher);
        hasher.finish()
    }
}
