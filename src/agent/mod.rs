//! Game-playing agents: a search strategy bound to an evaluator.
//!
//! An [`Agent`] owns one [`SearchContext`] for its whole lifetime, so the
//! transposition table carries over between the moves of a game. It is the
//! only place where a [`SearchTimeout`](crate::search::SearchTimeout) is
//! turned back into a move (or the `None` forfeit sentinel).

pub mod config;

#[cfg(test)]
mod tests;

use std::num::NonZeroUsize;

use log::{debug, info};

use crate::search::{
    iterative_deepening, minimax_search, Deadline, Evaluator, GameState, SearchContext,
    SearchStats,
};

pub use config::{AgentConfig, ConfigError, Strategy, MAX_SEARCH_DEPTH};

/// The outcome of the last `choose_move` call.
#[derive(Clone, Debug, PartialEq)]
pub struct Decision<M> {
    pub best_move: Option<M>,
    pub score: Option<f64>,
    /// Deepest fully searched depth; zero if nothing finished in time.
    pub completed_depth: u8,
    pub timed_out: bool,
}

pub struct Agent<S: GameState, E: Evaluator<S>> {
    config: AgentConfig,
    evaluator: E,
    context: SearchContext<S>,
    last_decision: Option<Decision<S::Move>>,
}

impl<S: GameState, E: Evaluator<S>> Agent<S, E> {
    pub fn new(config: AgentConfig, evaluator: E) -> Result<Self, ConfigError> {
        config.validate()?;
        let capacity =
            NonZeroUsize::new(config.cache_capacity).ok_or(ConfigError::ZeroCacheCapacity)?;

        let mut context = SearchContext::new(config.timeout_threshold).with_capacity(capacity);
        if let Some(seed) = config.seed {
            context = context.with_seed(seed);
        }

        Ok(Self {
            config,
            evaluator,
            context,
            last_decision: None,
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Statistics from the last search.
    pub fn stats(&self) -> &SearchStats {
        self.context.stats()
    }

    pub fn last_decision(&self) -> Option<&Decision<S::Move>> {
        self.last_decision.as_ref()
    }

    /// Drops every cached position, e.g. before starting a new game.
    pub fn reset(&mut self) {
        self.context.clear_cache();
        self.last_decision = None;
    }

    /// Picks a move for the player to move in `state` before `deadline`
    /// reaches the configured threshold.
    ///
    /// Minimax searches exactly `search_depth` plies. Alpha-beta keeps
    /// deepening until the deadline, a resolved game tree or
    /// `max_iterative_depth`.
    ///
    /// Returns `None` when the player has no legal moves, or when no search
    /// depth completed in time.
    pub fn choose_move<D: Deadline>(&mut self, state: &S, deadline: &D) -> Option<S::Move> {
        let decision = match self.config.strategy {
            Strategy::Minimax => {
                match minimax_search(
                    &mut self.context,
                    state,
                    &self.evaluator,
                    deadline,
                    self.config.search_depth,
                ) {
                    Ok(result) => Decision {
                        best_move: result.best_move,
                        score: Some(result.score),
                        completed_depth: self.config.search_depth,
                        timed_out: false,
                    },
                    Err(timeout) => {
                        debug!("minimax abandoned: {}", timeout);
                        Decision {
                            best_move: None,
                            score: None,
                            completed_depth: 0,
                            timed_out: true,
                        }
                    }
                }
            }
            Strategy::AlphaBeta => {
                let outcome = iterative_deepening(
                    &mut self.context,
                    state,
                    &self.evaluator,
                    deadline,
                    self.config.max_iterative_depth,
                );
                Decision {
                    best_move: outcome.best_move,
                    score: outcome.score,
                    completed_depth: outcome.completed_depth,
                    timed_out: outcome.timed_out,
                }
            }
        };

        info!(
            "{} chose {:?} (score {:?}, depth {}, {} nodes)",
            self.config.strategy,
            decision.best_move,
            decision.score,
            decision.completed_depth,
            self.context.stats().nodes
        );

        let best_move = decision.best_move.clone();
        self.last_decision = Some(decision);
        best_move
    }
}
