//! Minimax with alpha-beta pruning.
//!
//! `alpha` is the score the max player can already guarantee somewhere up
//! the current path, `beta` the score the min player can already hold it
//! to. Both are passed by value, so a bound tightened at one node only
//! narrows the window seen by that node's descendants. Once
//! `alpha >= beta` the remaining siblings cannot change any ancestor's
//! choice and are skipped.
//!
//! Called with the unbounded window the result equals [`minimax`]
//! exactly. With a narrower window the result is only guaranteed to be
//! exact when it lies strictly inside `(alpha, beta)`.
//!
//! [`minimax`]: super::minimax::minimax

use super::{Search, SearchStats};
use crate::score::{self, Score, INFINITY, NEG_INFINITY};
use crate::State;

/// Alpha-beta search starting from a caller-supplied window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBeta {
    /// Initial lower bound.
    pub alpha: Score,
    /// Initial upper bound.
    pub beta: Score,
}

impl AlphaBeta {
    /// Search with an explicit initial window.
    pub fn with_bounds(alpha: Score, beta: Score) -> Self {
        Self { alpha, beta }
    }
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::with_bounds(NEG_INFINITY, INFINITY)
    }
}

impl Search for AlphaBeta {
    fn score(&self, state: &State, stats: &mut SearchStats) -> Score {
        alphabeta_counted(state, self.alpha, self.beta, stats)
    }
}

/// Game value of `state`, identical to minimax, with pruning.
pub fn alphabeta(state: &State) -> Score {
    alphabeta_with_bounds(state, NEG_INFINITY, INFINITY)
}

/// Alpha-beta from an explicit window.
pub fn alphabeta_with_bounds(state: &State, alpha: Score, beta: Score) -> Score {
    alphabeta_counted(state, alpha, beta, &mut SearchStats::default())
}

/// Alpha-beta counting entered states and cutoffs in `stats`.
///
/// # Panics
///
/// If a non-terminal state has no successors, which cannot happen for a
/// state that passed [`State::validate`].
pub fn alphabeta_counted(
    state: &State,
    mut alpha: Score,
    mut beta: Score,
    stats: &mut SearchStats,
) -> Score {
    stats.nodes_visited += 1;
    if let Some(value) = state.value() {
        return value;
    }

    let mover = state.next_to_play();
    let mut best = score::worst_score(mover);
    let mut expanded = false;

    for child in state.children() {
        expanded = true;
        let child_score = alphabeta_counted(&child, alpha, beta, stats);
        if mover.is_maximizer() {
            best = best.max(child_score);
            alpha = alpha.max(child_score);
        } else {
            best = best.min(child_score);
            beta = beta.min(child_score);
        }
        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    assert!(expanded, "non-terminal state must have an empty cell: {state}");
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{DRAW, MAX_WIN, MIN_WIN};
    use crate::search::minimax::minimax_counted;
    use crate::Mark;

    fn state(board: &str, just_played: Mark) -> State {
        State::from_parts(board.parse().unwrap(), Some(just_played), just_played.opponent())
            .unwrap()
    }

    #[test]
    fn test_root_value_matches_minimax() {
        assert_eq!(alphabeta(&State::initial(Mark::O)), DRAW);
        assert_eq!(alphabeta(&State::initial(Mark::X)), DRAW);
    }

    #[test]
    fn test_open_wins() {
        assert_eq!(alphabeta(&state("O.O/XX./X..", Mark::X)), MAX_WIN);
        assert_eq!(alphabeta(&state("XX./OO./O..", Mark::O)), MIN_WIN);
    }

    #[test]
    fn test_prunes_on_empty_board() {
        let root = State::initial(Mark::O);
        let mut full = SearchStats::default();
        let mut pruned = SearchStats::default();
        minimax_counted(&root, &mut full);
        alphabeta_counted(&root, NEG_INFINITY, INFINITY, &mut pruned);

        assert!(pruned.nodes_visited < full.nodes_visited);
        assert!(pruned.cutoffs > 0);
    }

    #[test]
    fn test_window_above_value_fails_low() {
        // The true value is a draw, below alpha: the result is an upper bound
        // between the true value and alpha.
        let root = State::initial(Mark::O);
        let bounded = alphabeta_with_bounds(&root, 5, INFINITY);
        assert!((DRAW..=5).contains(&bounded));
    }

    #[test]
    fn test_trait_uses_configured_window() {
        let root = state("O.O/XX./X..", Mark::X);
        let mut stats = SearchStats::default();
        assert_eq!(AlphaBeta::default().score(&root, &mut stats), MAX_WIN);
        // Once the first child wins for O, every X reply below a later sibling
        // is cut off after its first child.
        assert!(stats.cutoffs >= 1);

        let mut narrow = SearchStats::default();
        assert_eq!(AlphaBeta::with_bounds(MIN_WIN, DRAW).score(&root, &mut narrow), MAX_WIN);
        assert_eq!(narrow.nodes_visited, 2);
    }
}
