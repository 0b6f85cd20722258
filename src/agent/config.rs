use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::search::transposition_table::DEFAULT_TT_CAPACITY;

/// Deepest search an agent accepts: one ply per cell of the largest board.
pub const MAX_SEARCH_DEPTH: u8 = 64;

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;
pub const DEFAULT_TIMEOUT_THRESHOLD: Duration = Duration::from_millis(10);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Fixed-depth minimax; forfeits the move if the depth does not finish.
    Minimax,
    /// Iterative-deepening alpha-beta that keeps deepening until time runs out.
    #[default]
    AlphaBeta,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Minimax => write!(f, "minimax"),
            Strategy::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

// used for parsing cli args
impl FromStr for Strategy {
    type Err = &'static str;
    fn from_str(strategy: &str) -> Result<Self, Self::Err> {
        match strategy {
            "minimax" => Ok(Strategy::Minimax),
            "alpha-beta" => Ok(Strategy::AlphaBeta),
            _ => Err("invalid strategy; options are: minimax, alpha-beta"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("search depth must be at least 1")]
    DepthTooLow,
    #[error("search depth {depth} exceeds the maximum of {max}")]
    DepthTooHigh { depth: u8, max: u8 },
    #[error("transposition table capacity must be non-zero")]
    ZeroCacheCapacity,
}

/// How an agent searches.
#[derive(Clone, Debug, PartialEq)]
pub struct AgentConfig {
    /// Fixed depth for minimax.
    pub search_depth: u8,
    /// Deepest iteration alpha-beta attempts; it normally stops earlier on
    /// timeout or once the game tree is resolved.
    pub max_iterative_depth: u8,
    /// The search gives up once the deadline has this much time or less left.
    pub timeout_threshold: Duration,
    pub strategy: Strategy,
    /// Maximum number of cached (position, depth) entries.
    pub cache_capacity: usize,
    /// Seed for tie-breaks; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            max_iterative_depth: MAX_SEARCH_DEPTH,
            timeout_threshold: DEFAULT_TIMEOUT_THRESHOLD,
            strategy: Strategy::default(),
            cache_capacity: DEFAULT_TT_CAPACITY,
            seed: None,
        }
    }
}

impl AgentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for depth in [self.search_depth, self.max_iterative_depth] {
            if depth == 0 {
                return Err(ConfigError::DepthTooLow);
            }
            if depth > MAX_SEARCH_DEPTH {
                return Err(ConfigError::DepthTooHigh {
                    depth,
                    max: MAX_SEARCH_DEPTH,
                });
            }
        }
        if self.cache_capacity == 0 {
            return Err(ConfigError::ZeroCacheCapacity);
        }
        Ok(())
    }
}
