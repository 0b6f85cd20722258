//! Bounded transposition table for caching search results.
//!
//! Entries are keyed by position hash *and* the remaining depth they were
//! searched to, so a shallow result is never reused for a deeper search (or the
//! other way round). Capacity is capped with least-recently-used eviction.

use std::hash::BuildHasherDefault;
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;

/// How a stored score relates to the true value of the position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BoundType {
    /// The score is the exact value.
    Exact,
    /// The true value is at least the score (fail-high).
    Lower,
    /// The true value is at most the score (fail-low).
    Upper,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TTEntry<M> {
    pub score: f64,
    pub best_move: Option<M>,
    pub bound_type: BoundType,
    /// True when the subtree below this entry reached no depth-limited leaf.
    pub resolved: bool,
}

impl<M> TTEntry<M> {
    pub fn exact(score: f64, best_move: Option<M>, resolved: bool) -> Self {
        Self {
            score,
            best_move,
            bound_type: BoundType::Exact,
            resolved,
        }
    }

    /// Returns the stored score if it settles a search over `[alpha, beta]`.
    ///
    /// Bounds only settle the search when they fall strictly outside the
    /// window, mirroring the strict cutoffs of the alpha-beta searcher.
    pub fn usable_score(&self, alpha: f64, beta: f64) -> Option<f64> {
        match self.bound_type {
            BoundType::Exact => Some(self.score),
            BoundType::Lower if self.score > beta => Some(self.score),
            BoundType::Upper if self.score < alpha => Some(self.score),
            _ => None,
        }
    }
}

/// Number of entries held when no capacity is configured.
pub const DEFAULT_TT_CAPACITY: usize = 1 << 20;

type TTKey = (u64, u8); // position_hash, remaining depth

pub struct TranspositionTable<M> {
    table: LruCache<TTKey, TTEntry<M>, BuildHasherDefault<FxHasher>>,
    hits: usize,
    misses: usize,
    stores: usize,
    overwrites: usize,
}

impl<M: Clone> Default for TranspositionTable<M> {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(DEFAULT_TT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}

impl<M: Clone> TranspositionTable<M> {
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            table: LruCache::with_hasher(capacity, BuildHasherDefault::default()),
            hits: 0,
            misses: 0,
            stores: 0,
            overwrites: 0,
        }
    }

    /// Looks up the entry for `hash` searched to exactly `depth` plies.
    pub fn get(&mut self, hash: u64, depth: u8) -> Option<TTEntry<M>> {
        match self.table.get(&(hash, depth)) {
            Some(entry) => {
                self.hits += 1;
                Some(entry.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Stores an entry, replacing any previous entry for the same key.
    pub fn store(&mut self, hash: u64, depth: u8, entry: TTEntry<M>) {
        self.stores += 1;
        if self.table.put((hash, depth), entry).is_some() {
            self.overwrites += 1;
        }
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.reset_stats();
    }

    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
        self.stores = 0;
        self.overwrites = 0;
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn stores(&self) -> usize {
        self.stores
    }

    pub fn overwrites(&self) -> usize {
        self.overwrites
    }

    pub fn size(&self) -> usize {
        self.table.len()
    }

    pub fn capacity(&self) -> usize {
        self.table.cap().get()
    }
}
