//! Per-agent search state: cache, tie-break RNG, timeout threshold and stats.

use std::num::NonZeroUsize;
use std::time::Duration;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::transposition_table::{TTEntry, TranspositionTable};
use super::{Deadline, Evaluator, GameState, SearchTimeout};

/// Statistics collected during the last search.
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub nodes: usize,
    pub evaluations: usize,
    pub cutoffs: usize,
    pub completed_depth: Option<u8>,
    pub last_score: Option<f64>,
    pub last_duration: Option<Duration>,
}

/// A finished search: the score is always from the point of view of the
/// player to move at the root of the search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<M> {
    pub score: f64,
    pub best_move: Option<M>,
}

impl<M> SearchResult<M> {
    pub fn leaf(score: f64) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// State owned by one agent for the lifetime of a game.
///
/// Cached scores are relative to the player who owns the search, so the
/// transposition table is dropped whenever a search starts for a different
/// owner.
pub struct SearchContext<S: GameState> {
    timeout_threshold: Duration,
    pub(crate) transposition_table: TranspositionTable<S::Move>,
    rng: StdRng,
    owner: Option<S::Player>,
    pub(crate) stats: SearchStats,
    /// Set whenever the current subtree reached a non-terminal leaf at depth 0.
    pub(crate) depth_limited: bool,
}

impl<S: GameState> SearchContext<S> {
    pub fn new(timeout_threshold: Duration) -> Self {
        Self {
            timeout_threshold,
            transposition_table: TranspositionTable::default(),
            rng: StdRng::from_entropy(),
            owner: None,
            stats: SearchStats::default(),
            depth_limited: false,
        }
    }

    pub fn with_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.transposition_table = TranspositionTable::new(capacity);
        self
    }

    /// Makes tie-breaks reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn timeout_threshold(&self) -> Duration {
        self.timeout_threshold
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn owner(&self) -> Option<S::Player> {
        self.owner
    }

    pub fn transposition_table(&self) -> &TranspositionTable<S::Move> {
        &self.transposition_table
    }

    pub fn clear_cache(&mut self) {
        self.transposition_table.clear();
    }

    /// Prepares for a search rooted at `state` and returns the search owner.
    pub(crate) fn begin_search(&mut self, state: &S) -> S::Player {
        let owner = state.active_player();
        if self.owner.map_or(false, |previous| previous != owner) {
            debug!("search owner changed to {:?}, clearing cache", owner);
            self.transposition_table.clear();
        }
        self.owner = Some(owner);
        self.stats = SearchStats::default();
        self.transposition_table.reset_stats();
        self.depth_limited = false;
        owner
    }

    pub(crate) fn finish_search(&mut self, score: Option<f64>, elapsed: Duration) {
        self.stats.last_score = score;
        self.stats.last_duration = Some(elapsed);
        debug!(
            "searched {} nodes ({} evaluations, {} cutoffs) in {:?}; tt hits {} misses {} size {}",
            self.stats.nodes,
            self.stats.evaluations,
            self.stats.cutoffs,
            elapsed,
            self.transposition_table.hits(),
            self.transposition_table.misses(),
            self.transposition_table.size(),
        );
    }

    /// The deadline check performed first at every recursive entry.
    #[inline]
    pub(crate) fn enter_node<D: Deadline>(&mut self, deadline: &D) -> Result<(), SearchTimeout> {
        deadline.check(self.timeout_threshold)?;
        self.stats.nodes += 1;
        Ok(())
    }

    #[inline]
    pub(crate) fn evaluate<E: Evaluator<S>>(
        &mut self,
        evaluator: &E,
        state: &S,
        owner: S::Player,
    ) -> f64 {
        self.stats.evaluations += 1;
        evaluator.evaluate(state, owner)
    }

    /// Picks uniformly among moves that tie for the best score.
    pub(crate) fn choose_tie(&mut self, ties: &[S::Move]) -> Option<S::Move> {
        ties.choose(&mut self.rng).cloned()
    }

    pub(crate) fn store(&mut self, hash: u64, depth: u8, entry: TTEntry<S::Move>) {
        self.transposition_table.store(hash, depth, entry);
    }
}
