//! Fixed-depth minimax search.
//!
//! Every node is expanded down to the requested depth. Scores are always
//! taken from the point of view of the search owner (the player to move at
//! the root): nodes where the owner is to move maximize, the others
//! minimize. Exact transpositions are served from the cache.

use std::time::Instant;

use log::debug;
use smallvec::SmallVec;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::context::{SearchContext, SearchResult};
use super::transposition_table::TTEntry;
use super::{Deadline, Evaluator, GameState, MoveCollection, SearchTimeout};

/// Searches `depth` plies below `state` and returns the best move for the
/// player to move.
///
/// Returns `Err(SearchTimeout)` if the deadline reached the context's
/// threshold at any node; no partial result survives a timeout. When the
/// player to move has no legal moves the result carries no move and the
/// evaluator's (losing) score.
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn minimax_search<S, E, D>(
    context: &mut SearchContext<S>,
    state: &S,
    evaluator: &E,
    deadline: &D,
    depth: u8,
) -> Result<SearchResult<S::Move>, SearchTimeout>
where
    S: GameState,
    E: Evaluator<S>,
    D: Deadline,
{
    debug!("minimax search depth: {}", depth);
    let start = Instant::now();
    let owner = context.begin_search(state);

    let result = minimax(context, state, evaluator, deadline, owner, depth, 0);

    match &result {
        Ok(found) => {
            context.stats.completed_depth = Some(depth);
            context.finish_search(Some(found.score), start.elapsed());
        }
        Err(_) => {
            debug!("minimax search at depth {} timed out", depth);
            context.finish_search(None, start.elapsed());
        }
    }
    result
}

fn minimax<S, E, D>(
    context: &mut SearchContext<S>,
    state: &S,
    evaluator: &E,
    deadline: &D,
    owner: S::Player,
    depth: u8,
    ply: u8,
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
            if let Some(score) = entry.usable_score(f64::NEG_INFINITY, f64::INFINITY) {
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
        context.store(hash, depth, TTEntry::exact(score, None, terminal));
        return Ok(SearchResult::leaf(score));
    }

    let candidates = state.legal_moves();
    if candidates.is_empty() {
        let score = context.evaluate(evaluator, state, owner);
        return Ok(SearchResult::leaf(score));
    }

    let maximizing = state.active_player() == owner;
    let mut best_score: Option<f64> = None;
    let mut ties: SmallVec<[S::Move; 8]> = SmallVec::new();

    for game_move in candidates.as_ref() {
        let child = state.forecast(game_move);
        let score = minimax(
            context,
            &child,
            evaluator,
            deadline,
            owner,
            depth - 1,
            ply + 1,
        )?
        .score;

        match best_score {
            Some(best) if score == best => ties.push(game_move.clone()),
            Some(best) if improves(score, best, maximizing) => {
                best_score = Some(score);
                ties.clear();
                ties.push(game_move.clone());
            }
            Some(_) => {}
            None => {
                best_score = Some(score);
                ties.push(game_move.clone());
            }
        }
    }

    let score = best_score.unwrap_or(if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    });
    let best_move = context.choose_tie(&ties);
    context.store(hash, depth, TTEntry::exact(score, best_move.clone(), false));

    Ok(SearchResult { score, best_move })
}

#[inline]
pub(crate) fn improves(score: f64, best: f64, maximizing: bool) -> bool {
    if maximizing {
        score > best
    } else {
        score < best
    }
}
