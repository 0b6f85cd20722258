//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "isolation",
    about = "A game-tree search agent for knight-move Isolation"
)]
pub enum Isolation {
    #[structopt(
        name = "best-move",
        about = "Choose a move for the player to move after the given `--moves` (space separated `row,col` cells, first move first) on a `--width` x `--height` board. The agent searches with the given `--strategy` (default: alpha-beta) within `--time-ms` (default: 150): alpha-beta deepens until time runs out, minimax searches to `--depth` (default: 3). Prints `(-1, -1)` when there is no move."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "watch",
        about = "Watch an alpha-beta agent play a minimax agent searching to `--depth` (default: 3), with `--time-ms` (default: 150) per move. The alpha-beta agent plays first unless you choose otherwise with `--alpha-beta-player`."
    )]
    Watch(WatchArgs),
}

impl crate::cli::commands::Command for Isolation {
    fn execute(self) {
        match self {
            Self::BestMove(cmd) => cmd.execute(),
            Self::Watch(cmd) => cmd.execute(),
        }
    }
}
