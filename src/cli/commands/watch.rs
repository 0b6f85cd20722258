//! Watch command - watch an alpha-beta agent play a minimax agent.

use std::time::{Duration, Instant};

use isolation::agent::{Agent, Strategy};
use isolation::board::{Board, DisplayMove, Player};
use isolation::evaluate::Heuristic;
use isolation::search::{Countdown, GameState};
use structopt::StructOpt;

use super::util::{create_config, exit_with_error};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long, default_value = "7")]
    pub width: u8,
    #[structopt(long, default_value = "7")]
    pub height: u8,
    #[structopt(short, long, default_value = "3")]
    pub depth: u8,
    #[structopt(long = "time-ms", default_value = "150")]
    pub time_ms: u64,
    #[structopt(long = "threshold-ms", default_value = "10")]
    pub threshold_ms: u64,
    #[structopt(long, default_value = "improved")]
    pub heuristic: Heuristic,
    #[structopt(
        long = "alpha-beta-player",
        default_value = "1",
        help = "Which player the alpha-beta agent controls: 1, 2 or random"
    )]
    pub alpha_beta_player: Player,
    #[structopt(long)]
    pub seed: Option<u64>,
}

/// How a watched game ended.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Stuck { winner: Player },
    Timeout { winner: Player },
    IllegalMove { winner: Player },
}

impl Command for WatchArgs {
    fn execute(self) {
        let mut board = Board::new(self.width, self.height)
            .unwrap_or_else(|err| exit_with_error(format!("Invalid board: {}", err)));

        let create_agent = |strategy, seed| {
            let config = create_config(self.depth, self.threshold_ms, strategy, seed);
            Agent::<Board, Heuristic>::new(config, self.heuristic)
                .unwrap_or_else(|err| exit_with_error(format!("Invalid configuration: {}", err)))
        };
        let alpha_beta = create_agent(Strategy::AlphaBeta, self.seed);
        let minimax = create_agent(Strategy::Minimax, self.seed.map(|seed| seed.wrapping_add(1)));
        let mut agents = match self.alpha_beta_player {
            Player::One => [alpha_beta, minimax],
            Player::Two => [minimax, alpha_beta],
        };

        let time_limit = Duration::from_millis(self.time_ms);
        println!("{}", board);

        let outcome = loop {
            let player = board.active_player();
            let agent = &mut agents[player.index()];

            let start = Instant::now();
            let chosen = agent.choose_move(&board, &Countdown::new(time_limit));
            let elapsed = start.elapsed();

            let mv = match chosen {
                Some(mv) => mv,
                None if board.legal_moves().is_empty() => {
                    break Outcome::Stuck {
                        winner: player.opponent(),
                    }
                }
                None => {
                    break Outcome::Timeout {
                        winner: player.opponent(),
                    }
                }
            };
            if elapsed > time_limit {
                break Outcome::Timeout {
                    winner: player.opponent(),
                };
            }
            if board.apply_move(mv).is_err() {
                break Outcome::IllegalMove {
                    winner: player.opponent(),
                };
            }

            let depth = agent
                .last_decision()
                .map_or(0, |decision| decision.completed_depth);
            println!(
                "{} ({}) moves to {} after {:?}, depth {}",
                player,
                agent.config().strategy,
                DisplayMove(Some(mv)),
                elapsed,
                depth
            );
            println!("{}", board);
        };

        match outcome {
            Outcome::Stuck { winner } => {
                println!("{} wins: {} has no moves left", winner, winner.opponent())
            }
            Outcome::Timeout { winner } => {
                println!("{} wins: {} forfeits on time", winner, winner.opponent())
            }
            Outcome::IllegalMove { winner } => {
                println!("{} wins: {} made an illegal move", winner, winner.opponent())
            }
        }
    }
}
