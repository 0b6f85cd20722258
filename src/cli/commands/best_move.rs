//! Best move command - choose a move for a given position.

use std::time::Duration;

use isolation::agent::{Agent, Strategy};
use isolation::board::DisplayMove;
use isolation::evaluate::Heuristic;
use isolation::search::Countdown;
use structopt::StructOpt;

use super::util::{create_config, exit_with_error, replay_moves};
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(long, default_value = "7")]
    pub width: u8,
    #[structopt(long, default_value = "7")]
    pub height: u8,
    #[structopt(
        short,
        long,
        default_value = "",
        help = "Moves played so far, e.g. \"3,3 0,0 5,4\""
    )]
    pub moves: String,
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(long = "time-ms", default_value = "150")]
    pub time_ms: u64,
    #[structopt(
        long = "threshold-ms",
        default_value = "10",
        help = "Stop searching once this much time is left"
    )]
    pub threshold_ms: u64,
    #[structopt(short, long, default_value = "alpha-beta")]
    pub strategy: Strategy,
    #[structopt(long, default_value = "improved")]
    pub heuristic: Heuristic,
    #[structopt(long)]
    pub seed: Option<u64>,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let board = replay_moves(self.width, self.height, &self.moves)
            .unwrap_or_else(|err| exit_with_error(format!("Invalid position: {}", err)));

        let config = create_config(self.depth, self.threshold_ms, self.strategy, self.seed);
        let mut agent = Agent::new(config, self.heuristic)
            .unwrap_or_else(|err| exit_with_error(format!("Invalid configuration: {}", err)));

        let deadline = Countdown::new(Duration::from_millis(self.time_ms));
        let best_move = agent.choose_move(&board, &deadline);
        println!("{}", DisplayMove(best_move));
    }
}
