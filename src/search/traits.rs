//! Core traits for generic game-tree search.

use std::fmt::Debug;

/// An immutable snapshot of a two-player game in which the player to move
/// loses when they have no legal moves.
///
/// Searchers never mutate a state: every expansion goes through `forecast`,
/// which returns a fresh snapshot.
pub trait GameState: Clone {
    type Move: Clone + PartialEq + Debug;
    type Player: Copy + Eq + Debug;
    type MoveList: MoveCollection<Self::Move>;

    /// Legal moves for the given player, in a stable order.
    fn legal_moves_for(&self, player: Self::Player) -> Self::MoveList;

    /// Returns the state after the active player plays `game_move`.
    fn forecast(&self, game_move: &Self::Move) -> Self;

    /// The player who moves next.
    fn active_player(&self) -> Self::Player;

    /// The player who just moved.
    fn inactive_player(&self) -> Self::Player;

    fn opponent(&self, player: Self::Player) -> Self::Player;

    /// Hash of occupancy, player locations and the active player. Used only as a
    /// cache key; equal hashes are treated as equal states.
    fn position_hash(&self) -> u64;

    /// Legal moves for the active player.
    #[inline]
    fn legal_moves(&self) -> Self::MoveList {
        self.legal_moves_for(self.active_player())
    }

    /// True when `player` has won, i.e. the opponent is to move and is stuck.
    fn is_winner(&self, player: Self::Player) -> bool {
        player == self.inactive_player() && self.legal_moves().is_empty()
    }

    /// True when `player` has lost, i.e. they are to move and are stuck.
    fn is_loser(&self, player: Self::Player) -> bool {
        player == self.active_player() && self.legal_moves().is_empty()
    }

    /// True when either player has won.
    fn is_terminal(&self) -> bool {
        self.is_winner(self.active_player()) || self.is_winner(self.inactive_player())
    }
}

/// Scores a state from the point of view of `player`.
///
/// Implementations must return `f64::INFINITY` when `player` has won,
/// `f64::NEG_INFINITY` when `player` has lost, and a finite value otherwise
/// (higher is better for `player`). NaN is never a valid score.
pub trait Evaluator<S: GameState> {
    fn evaluate(&self, state: &S, player: S::Player) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, S::Player) -> f64,
{
    #[inline]
    fn evaluate(&self, state: &S, player: S::Player) -> f64 {
        self(state, player)
    }
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }

    #[inline]
    fn contains(&self, game_move: &M) -> bool
    where
        M: PartialEq,
    {
        self.as_ref().contains(game_move)
    }
}

impl<M> MoveCollection<M> for Vec<M> {}

impl<A: smallvec::Array> MoveCollection<A::Item> for smallvec::SmallVec<A> {}
