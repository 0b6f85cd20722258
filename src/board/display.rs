use super::{Board, Move, Player};
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.width() {
            write!(f, " {} ", col)?;
        }
        writeln!(f)?;

        for row in 0..self.height() {
            write!(f, "{:>2} ", row)?;
            for col in 0..self.width() {
                let cell = Move::new(row, col);
                let symbol = if self.player_location(Player::One) == Some(cell) {
                    '1'
                } else if self.player_location(Player::Two) == Some(cell) {
                    '2'
                } else if self.is_blank(cell) {
                    '.'
                } else {
                    '#'
                };
                write!(f, " {} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
