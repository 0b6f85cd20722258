//! Generic game-tree search: fixed-depth minimax, iterative-deepening
//! alpha-beta, a depth-qualified transposition table and the deadline
//! discipline shared by both searchers.
//!
//! Searchers only see games through the [`GameState`] and [`Evaluator`]
//! traits. Every recursive entry polls the [`Deadline`] before doing any
//! other work; an expired budget unwinds the whole search as
//! [`SearchTimeout`], which only the caller that started the search handles.
//!
//! Recursion depth equals search depth, so stack usage grows linearly with
//! the configured depth; callers cap it (see `agent::MAX_SEARCH_DEPTH`).

pub mod alpha_beta;
pub mod context;
pub mod deadline;
pub mod minimax;
pub mod traits;
pub mod transposition_table;


pub use alpha_beta::{alpha_beta_search, iterative_deepening, IterativeResult};
pub use context::{SearchContext, SearchResult, SearchStats};
pub use deadline::{Countdown, Deadline, SearchTimeout, StepClock, Unlimited};
pub use minimax::minimax_search;
pub use traits::{Evaluator, GameState, MoveCollection};
pub use transposition_table::{BoundType, TTEntry, TranspositionTable};
