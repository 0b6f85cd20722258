//! Shared utilities for CLI commands.

use std::time::Duration;

use isolation::agent::{AgentConfig, Strategy};
use isolation::board::{Board, BoardError, Move};

/// Replays space separated `row,col` moves on an empty board.
pub(crate) fn replay_moves(width: u8, height: u8, moves: &str) -> Result<Board, BoardError> {
    let mut board = Board::new(width, height)?;
    for token in moves.split_whitespace() {
        board.apply_move(token.parse::<Move>()?)?;
    }
    Ok(board)
}

pub(crate) fn create_config(
    depth: u8,
    threshold_ms: u64,
    strategy: Strategy,
    seed: Option<u64>,
) -> AgentConfig {
    AgentConfig {
        search_depth: depth,
        timeout_threshold: Duration::from_millis(threshold_ms),
        strategy,
        seed,
        ..AgentConfig::default()
    }
}

/// Prints `message` on stderr and exits with a failure status.
pub(crate) fn exit_with_error(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}
