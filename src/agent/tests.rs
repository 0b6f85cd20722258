use std::collections::HashSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::*;
use crate::board::{Board, Move, Player};
use crate::evaluate::{Heuristic, ImprovedScore};
use crate::search::{Countdown, GameState, StepClock, Unlimited};

/// Caps iterative deepening at `search_depth` too, so both strategies search
/// to the same depth.
fn config(strategy: Strategy, search_depth: u8) -> AgentConfig {
    AgentConfig {
        search_depth,
        max_iterative_depth: search_depth,
        timeout_threshold: Duration::ZERO,
        strategy,
        cache_capacity: 1 << 16,
        seed: Some(11),
    }
}

/// Plays `plies` random legal moves from an empty board.
fn random_position(width: u8, height: u8, plies: usize, seed: u64) -> Board {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new(width, height).unwrap();
    for _ in 0..plies {
        let moves = board.legal_moves();
        match moves.choose(&mut rng) {
            Some(&mv) => board = board.forecast(&mv),
            None => break,
        }
    }
    board
}

/// Depth-2 minimax values of every opening move on an empty 3x3 board under
/// `own - opp`, computed without the board or search modules.
fn brute_force_three_by_three() -> Vec<((i32, i32), f64)> {
    const KNIGHT: [(i32, i32); 8] = [
        (-2, -1),
        (-2, 1),
        (-1, -2),
        (-1, 2),
        (1, -2),
        (1, 2),
        (2, -1),
        (2, 1),
    ];
    let cells: Vec<(i32, i32)> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
    let jumps = |from: (i32, i32), blocked: &[(i32, i32)]| -> usize {
        KNIGHT
            .iter()
            .map(|(dr, dc)| (from.0 + dr, from.1 + dc))
            .filter(|&(r, c)| (0..3).contains(&r) && (0..3).contains(&c))
            .filter(|cell| !blocked.contains(cell))
            .count()
    };

    cells
        .iter()
        .map(|&first| {
            let value = cells
                .iter()
                .filter(|&&reply| reply != first)
                .map(|&reply| {
                    let blocked = [first, reply];
                    let own = jumps(first, &blocked);
                    let opp = jumps(reply, &blocked);
                    if own == 0 {
                        f64::NEG_INFINITY
                    } else {
                        own as f64 - opp as f64
                    }
                })
                .fold(f64::INFINITY, f64::min);
            (first, value)
        })
        .collect()
}

#[test]
fn test_new_rejects_invalid_config() {
    let result = Agent::<Board, _>::new(config(Strategy::AlphaBeta, 0), ImprovedScore);
    assert!(matches!(result, Err(ConfigError::DepthTooLow)));

    let result = Agent::<Board, _>::new(config(Strategy::Minimax, 65), ImprovedScore);
    assert!(matches!(
        result,
        Err(ConfigError::DepthTooHigh { depth: 65, max: 64 })
    ));

    let no_cache = AgentConfig {
        cache_capacity: 0,
        ..AgentConfig::default()
    };
    let result = Agent::<Board, _>::new(no_cache, ImprovedScore);
    assert!(matches!(result, Err(ConfigError::ZeroCacheCapacity)));
}

#[test]
fn test_three_by_three_depth_two_matches_brute_force() {
    let table = brute_force_three_by_three();
    let best = table.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
    let tied: HashSet<Move> = table
        .iter()
        .filter(|(_, v)| *v == best)
        .map(|&((r, c), _)| Move::new(r as u8, c as u8))
        .collect();

    assert_eq!(best, 0.0);
    assert_eq!(tied.len(), 8);
    assert!(!tied.contains(&Move::new(1, 1)));

    let board = Board::new(3, 3).unwrap();
    for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
        for seed in 0..10 {
            let agent_config = AgentConfig {
                seed: Some(seed),
                ..config(strategy, 2)
            };
            let mut agent = Agent::new(agent_config, ImprovedScore).unwrap();
            let mv = agent.choose_move(&board, &Unlimited).unwrap();

            assert!(tied.contains(&mv), "{} chose {:?}", strategy, mv);
            let decision = agent.last_decision().unwrap();
            assert_eq!(decision.score, Some(0.0));
            assert_eq!(decision.completed_depth, 2);
            assert!(!decision.timed_out);
        }
    }
}

#[test]
fn test_alpha_beta_scores_match_minimax() {
    for seed in 0..6 {
        for (width, height, plies) in [(3, 3, 2), (4, 4, 2), (4, 4, 4)] {
            let board = random_position(width, height, plies, seed);
            for depth in 1..=3 {
                let mut minimax =
                    Agent::new(config(Strategy::Minimax, depth), ImprovedScore).unwrap();
                let mut alpha_beta =
                    Agent::new(config(Strategy::AlphaBeta, depth), ImprovedScore).unwrap();
                minimax.choose_move(&board, &Unlimited);
                alpha_beta.choose_move(&board, &Unlimited);

                let minimax_decision = minimax.last_decision().unwrap();
                let alpha_beta_decision = alpha_beta.last_decision().unwrap();
                // deepening may stop early on a resolved tree, with the same score
                assert_eq!(
                    minimax_decision.score, alpha_beta_decision.score,
                    "seed {} depth {}\n{}",
                    seed, depth, board
                );
            }
        }
    }
}

#[test]
fn test_moves_are_legal() {
    for heuristic in Heuristic::ALL {
        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let mut agent = Agent::new(config(strategy, 3), heuristic).unwrap();
            for seed in 0..4 {
                let board = random_position(5, 5, seed as usize * 2, seed);
                if let Some(mv) = agent.choose_move(&board, &Unlimited) {
                    assert!(board.legal_moves().contains(&mv));
                } else {
                    assert!(board.legal_moves().is_empty());
                }
            }
        }
    }
}

#[test]
fn test_terminal_root_returns_sentinel() {
    let board = Board::from_rows(&["...", ".1.", "..2"], Player::One).unwrap();
    for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
        let mut agent = Agent::new(config(strategy, 3), ImprovedScore).unwrap();
        assert_eq!(agent.choose_move(&board, &Unlimited), None);
        let decision = agent.last_decision().unwrap();
        assert_eq!(decision.score, Some(f64::NEG_INFINITY));
        assert!(!decision.timed_out);
    }
}

#[test]
fn test_zero_budget_returns_sentinel() {
    let board = Board::default();
    for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
        let agent_config = AgentConfig {
            timeout_threshold: Duration::from_millis(10),
            ..config(strategy, 3)
        };
        let mut agent = Agent::new(agent_config, ImprovedScore).unwrap();

        assert_eq!(agent.choose_move(&board, &Countdown::new(Duration::ZERO)), None);
        let decision = agent.last_decision().unwrap();
        assert!(decision.timed_out);
        assert_eq!(decision.completed_depth, 0);
        assert_eq!(decision.score, None);
    }
}

#[test]
fn test_minimax_forfeits_when_depth_does_not_finish() {
    let board = random_position(5, 5, 2, 3);
    let mut agent = Agent::new(config(Strategy::Minimax, 3), ImprovedScore).unwrap();
    assert_eq!(agent.choose_move(&board, &StepClock::with_reads(5)), None);
    assert!(agent.last_decision().unwrap().timed_out);
}

#[test]
fn test_more_time_never_completes_less() {
    let board = random_position(5, 5, 2, 5);
    let mut previous_depth = 0;
    for reads in [1, 5, 20, 100, 400, 2_000, 10_000] {
        let mut agent = Agent::new(config(Strategy::AlphaBeta, 6), ImprovedScore).unwrap();
        let mv = agent.choose_move(&board, &StepClock::with_reads(reads));
        let decision = agent.last_decision().unwrap();

        assert!(decision.completed_depth >= previous_depth);
        assert_eq!(mv.is_some(), decision.completed_depth > 0);
        if let Some(mv) = mv {
            assert!(board.legal_moves().contains(&mv));
        }
        previous_depth = decision.completed_depth;
    }
    assert!(previous_depth >= 2);
}

#[test]
fn test_alpha_beta_deepens_past_search_depth() {
    // the first line searched stays open past four plies, so the tree is not
    // resolved at depth 3
    let board = Board::new(5, 5)
        .unwrap()
        .forecast(&Move::new(2, 2))
        .forecast(&Move::new(1, 3));
    let agent_config = AgentConfig {
        timeout_threshold: Duration::ZERO,
        seed: Some(3),
        ..AgentConfig::default()
    };
    assert_eq!(agent_config.search_depth, 3);

    let mut agent = Agent::new(agent_config, ImprovedScore).unwrap();
    let mv = agent.choose_move(&board, &StepClock::with_reads(100_000));
    let decision = agent.last_decision().unwrap();

    assert!(
        decision.completed_depth > 3,
        "stopped at depth {}",
        decision.completed_depth
    );
    assert!(board.legal_moves().contains(&mv.unwrap()));
}

#[test]
fn test_seeded_agents_agree() {
    let board = Board::new(4, 4).unwrap();
    let mut first = Agent::new(config(Strategy::AlphaBeta, 3), ImprovedScore).unwrap();
    let mut second = Agent::new(config(Strategy::AlphaBeta, 3), ImprovedScore).unwrap();
    for _ in 0..3 {
        assert_eq!(
            first.choose_move(&board, &Unlimited),
            second.choose_move(&board, &Unlimited)
        );
    }
}

#[test]
fn test_agent_plays_a_full_game() {
    let mut board = Board::new(5, 5).unwrap();
    let mut one = Agent::new(config(Strategy::AlphaBeta, 3), Heuristic::Aggressive).unwrap();
    let mut two = Agent::new(config(Strategy::Minimax, 2), Heuristic::Improved).unwrap();

    while let Some(mv) = match board.active_player() {
        Player::One => one.choose_move(&board, &Unlimited),
        Player::Two => two.choose_move(&board, &Unlimited),
    } {
        board.apply_move(mv).unwrap();
    }

    assert!(board.is_terminal());
    assert!(board.is_loser(board.active_player()));
    assert!(one.stats().nodes > 0);
}
