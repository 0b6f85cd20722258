//! Alpha-beta search driven by iterative deepening.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Branches whose value provably falls outside the
//! window are abandoned without affecting the result, so the searcher returns the same score as
//! minimax at the same depth while visiting fewer nodes.
//!
//! Cutoffs are strict: a maximizing node stops only once its best score is *greater* than beta,
//! and a minimizing node only once it is *less* than alpha. Any score returned inside the closed
//! window is therefore exact, which keeps equal-score moves genuinely equal and lets the root
//! break ties among them exactly like minimax does.
//!
//! # Iterative Deepening
//!
//! The driver searches depths 1, 2, ... up to the configured limit and keeps the move from the
//! last depth that completed. A timeout discards the unfinished depth and the previous answer is
//! returned, so a legal move is available as soon as depth 1 has finished. Deepening stops early
//! once a depth completes without reaching any depth-limited leaf: the game tree is then fully
//! resolved and deeper searches cannot change the answer.
//!
//! # Transposition Table
//!
//! Results are cached per (position, remaining depth) together with their bound type, so a
//! score produced by a cutoff is only reused when it still decides the current window.

use std::mem;
use std::time::Instant;

use log::{debug, trace};
use smallvec::SmallVec;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::context::{SearchContext, SearchResult};
use super::minimax::improves;
use super::transposition_table::{BoundType, TTEntry};
use super::{Deadline, Evaluator, GameState, MoveCollection, SearchTimeout};

/// Outcome of an iterative-deepening run.
#[derive(Clone, Debug, PartialEq)]
pub struct IterativeResult<M> {
    /// Best move of the deepest completed iteration, `None` if the root has no
    /// legal moves or no iteration completed in time.
    pub best_move: Option<M>,
    /// Score of the deepest completed iteration.
    pub score: Option<f64>,
    /// Deepest iteration that completed; zero if none did.
    pub completed_depth: u8,
    pub timed_out: bool,
}

impl<M> Default for IterativeResult<M> {
    fn default() -> Self {
        Self {
            best_move: None,
            score: None,
            completed_depth: 0,
            timed_out: false,
        }
    }
}

/// Searches `depth` plies below `state` inside the window `[alpha, beta]`.
///
/// With the full window `(-inf, +inf)` the returned score equals the minimax
/// score at the same depth.
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta_search<S, E, D>(
    context: &mut SearchContext<S>,
    state: &S,
    evaluator: &E,
    deadline: &D,
    depth: u8,
    alpha: f64,
    beta: f64,
) -> Result<SearchResult<S::Move>, SearchTimeout>
where
    S: GameState,
    E: Evaluator<S>,
    D: Deadline,
{
    debug!("alpha-beta search depth: {}", depth);
    let start = Instant::now();
    let owner = context.begin_search(state);

    let result = alpha_beta(
        context, state, evaluator, deadline, owner, depth, 0, alpha, beta,
    );

    match &result {
        Ok(found) => {
            context.stats.completed_depth = Some(depth);
            context.finish_search(Some(found.score), start.elapsed());
        }
        Err(_) => {
            debug!("alpha-beta search at depth {} timed out", depth);
            context.finish_search(None, start.elapsed());
        }
    }
    result
}

/// Runs alpha-beta at increasing depths until `max_depth`, a timeout, or a
/// fully resolved game tree, and returns the last completed answer.
///
/// This is the recovery point for `SearchTimeout`: a timeout never escapes.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn iterative_deepening<S, E, D>(
    context: &mut SearchContext<S>,
    state: &S,
    evaluator: &E,
    deadline: &D,
    max_depth: u8,
) -> IterativeResult<S::Move>
where
    S: GameState,
    E: Evaluator<S>,
    D: Deadline,
{
    let start = Instant::now();
    let owner = context.begin_search(state);
    let mut outcome = IterativeResult::default();

    if state.legal_moves().is_empty() {
        debug!("no legal moves at the root");
        outcome.score = Some(context.evaluate(evaluator, state, owner));
        context.finish_search(outcome.score, start.elapsed());
        return outcome;
    }

    for depth in 1..=max_depth {
        context.depth_limited = false;

        match alpha_beta(
            context,
            state,
            evaluator,
            deadline,
            owner,
            depth,
            0,
            f64::NEG_INFINITY,
            f64::INFINITY,
        ) {
            Ok(result) => {
                debug!(
                    "completed depth {}: score {} move {:?}",
                    depth, result.score, result.best_move
                );
                outcome.best_move = result.best_move;
                outcome.score = Some(result.score);
                outcome.completed_depth = depth;
                context.stats.completed_depth = Some(depth);

                if !context.depth_limited {
                    debug!("game tree resolved at depth {}", depth);
                    break;
                }
            }
            Err(SearchTimeout) => {
                debug!(
                    "timed out during depth {}, keeping depth {} result",
                    depth, outcome.completed_depth
                );
                outcome.timed_out = true;
                break;
            }
        }
    }

    context.finish_search(outcome.score, start.elapsed());
    outcome
}

#[allow(clippy::too_many_arguments)]
fn alpha_beta<S, E, D>(
    context: &mut SearchContext<S>,
    state: &S,
    evaluator: &E,
    deadline: &D,
    owner: S::Player,
    depth: u8,
    ply: u8,
    mut alpha: f64,
    mut beta: f64,
) -> Result<SearchResult<S::Move>, SearchTimeout>
where
    S: GameState,
    E: Evaluator<S>,
    D: Deadline,
{
    context.enter_node(deadline)?;

    let hash = state.position_hash();
    // the root is always searched so that ties are re-drawn on every call
    if ply > 0 {
        if let Some(entry) = context.transposition_table.get(hash, depth) {
            if let Some(score) = entry.usable_score(alpha, beta) {
                trace!("tt hit at ply {}: {}", ply, score);
                if !entry.resolved {
                    context.depth_limited = true;
                }
                return Ok(SearchResult {
                    score,
                    best_move: entry.best_move,
                });
            }
        }
    }

    let terminal = state.is_terminal();
    if depth == 0 || terminal {
        let score = context.evaluate(evaluator, state, owner);
        if !terminal {
            context.depth_limited = true;
        }
        context.store(hash, depth, TTEntry::exact(score, None, terminal));
        return Ok(SearchResult::leaf(score));
    }

    let candidates = state.legal_moves();
    if candidates.is_empty() {
        let score = context.evaluate(evaluator, state, owner);
        return Ok(SearchResult::leaf(score));
    }

    let (window_alpha, window_beta) = (alpha, beta);
    let outer_depth_limited = mem::replace(&mut context.depth_limited, false);
    let maximizing = state.active_player() == owner;
    let mut best_score: Option<f64> = None;
    let mut ties: SmallVec<[S::Move; 8]> = SmallVec::new();

    for game_move in candidates.as_ref() {
        let child = state.forecast(game_move);
        let score = alpha_beta(
            context,
            &child,
            evaluator,
            deadline,
            owner,
            depth - 1,
            ply + 1,
            alpha,
            beta,
        )?
        .score;

        match best_score {
            Some(best) if score == best => {
                ties.push(game_move.clone());
                continue;
            }
            Some(best) if !improves(score, best, maximizing) => continue,
            _ => {
                best_score = Some(score);
                ties.clear();
                ties.push(game_move.clone());
            }
        }

        if maximizing {
            if score > beta {
                context.stats.cutoffs += 1;
                break;
            }
            alpha = alpha.max(score);
        } else {
            if score < alpha {
                context.stats.cutoffs += 1;
                break;
            }
            beta = beta.min(score);
        }
    }

    let score = best_score.unwrap_or(if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    });
    let bound_type = if score > window_beta {
        BoundType::Lower
    } else if score < window_alpha {
        BoundType::Upper
    } else {
        BoundType::Exact
    };
    let best_move = context.choose_tie(&ties);

    let resolved = !context.depth_limited;
    context.depth_limited |= outer_depth_limited;
    context.store(
        hash,
        depth,
        TTEntry {
            score,
            best_move: best_move.clone(),
            bound_type,
            resolved,
        },
    );

    Ok(SearchResult { score, best_move })
}
