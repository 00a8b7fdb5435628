//! Plain minimax.

use super::{Search, SearchStats};
use crate::score::Score;
use crate::State;

/// Exhaustive minimax with no pruning and no memoization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimax;

impl Search for Minimax {
    fn score(&self, state: &State, stats: &mut SearchStats) -> Score {
        minimax_counted(state, stats)
    }
}

/// Game value of `state` under optimal play by both sides.
pub fn minimax(state: &State) -> Score {
    minimax_counted(state, &mut SearchStats::default())
}

/// [`minimax`], counting every state entered in `stats`.
///
/// # Panics
///
/// If a non-terminal state has no successors, which cannot happen for a
/// state that passed [`State::validate`].
pub fn minimax_counted(state: &State, stats: &mut SearchStats) -> Score {
    stats.nodes_visited += 1;
    if let Some(value) = state.value() {
        return value;
    }

    let scores = state.children().map(|child| minimax_counted(&child, stats));
    let best = if state.next_to_play().is_maximizer() {
        scores.max()
    } else {
        scores.min()
    };
    best.expect("non-terminal state must have an empty cell")
}
