//! Heuristics for scoring Isolation positions at the search horizon.
//!
//! Every heuristic returns `f64::INFINITY` when the player has won,
//! `f64::NEG_INFINITY` when the player has lost, and a finite score (higher is
//! better for the player) otherwise.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Player};
use crate::search::{Evaluator, GameState};

/// Returns the score of a decided game from `player`'s point of view.
#[inline(always)]
pub fn terminal_score(board: &Board, player: Player) -> Option<f64> {
    if board.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if board.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

/// Number of moves available to the player.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenMoveScore;

impl Evaluator<Board> for OpenMoveScore {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        terminal_score(board, player).unwrap_or_else(|| board.moves_for(player).len() as f64)
    }
}

/// The player's move count minus the opponent's.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImprovedScore;

impl Evaluator<Board> for ImprovedScore {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        terminal_score(board, player).unwrap_or_else(|| mobility_difference(board, player))
    }
}

/// Improved score plus a bonus for every available move that lands close to
/// the opponent, so the player crowds the opponent's remaining space.
#[derive(Clone, Copy, Debug, Default)]
pub struct AggressiveScore;

impl Evaluator<Board> for AggressiveScore {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        if let Some(score) = terminal_score(board, player) {
            return score;
        }

        let mut score = mobility_difference(board, player);
        let opponent = board.opponent(player);
        if let Some(target) = board.player_location(opponent) {
            let max_distance = (board.width() + board.height()) as f64;
            for own_move in board.moves_for(player).iter() {
                let distance = own_move.manhattan_distance(&target) as f64;
                score += 1.0 - distance / max_distance;
            }
        }
        score
    }
}

/// Prefers staying near the middle of the board.
#[derive(Clone, Copy, Debug, Default)]
pub struct CenterScore;

impl Evaluator<Board> for CenterScore {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        if let Some(score) = terminal_score(board, player) {
            return score;
        }

        match board.player_location(player) {
            Some(location) => {
                let center_row = board.height() as f64 / 2.0;
                let center_col = board.width() as f64 / 2.0;
                let d_row = location.row as f64 + 0.5 - center_row;
                let d_col = location.col as f64 + 0.5 - center_col;
                -(d_row * d_row + d_col * d_col)
            }
            None => 0.0,
        }
    }
}

#[inline(always)]
fn mobility_difference(board: &Board, player: Player) -> f64 {
    let own_moves = board.moves_for(player).len() as f64;
    let opponent_moves = board.moves_for(board.opponent(player)).len() as f64;
    own_moves - opponent_moves
}

/// Selects one of the heuristics by name, for configuration and the CLI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Heuristic {
    OpenMove,
    #[default]
    Improved,
    Aggressive,
    Center,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::OpenMove,
        Heuristic::Improved,
        Heuristic::Aggressive,
        Heuristic::Center,
    ];
}

impl Evaluator<Board> for Heuristic {
    fn evaluate(&self, board: &Board, player: Player) -> f64 {
        match self {
            Heuristic::OpenMove => OpenMoveScore.evaluate(board, player),
            Heuristic::Improved => ImprovedScore.evaluate(board, player),
            Heuristic::Aggressive => AggressiveScore.evaluate(board, player),
            Heuristic::Center => CenterScore.evaluate(board, player),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heuristic::OpenMove => "open-move",
            Heuristic::Improved => "improved",
            Heuristic::Aggressive => "aggressive",
            Heuristic::Center => "center",
        };
        write!(f, "{}", name)
    }
}

// used for parsing cli args
impl FromStr for Heuristic {
    type Err = &'static str;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "open-move" => Ok(Heuristic::OpenMove),
            "improved" => Ok(Heuristic::Improved),
            "aggressive" => Ok(Heuristic::Aggressive),
            "center" => Ok(Heuristic::Center),
            _ => Err("invalid heuristic; options are: open-move, improved, aggressive, center"),
        }
    }
}
