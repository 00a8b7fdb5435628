//! Picking the next move from a search.

use super::{Search, SearchStats};
use crate::error::SearchError;
use crate::score::{self, Score};
use crate::{Position, State};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Search value of one successor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ChildScore {
    /// Cell the mover would fill.
    pub position: Position,
    /// Value of the resulting state.
    pub score: Score,
}

/// The chosen move together with every alternative that was scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestMove {
    position: Position,
    state: State,
    score: Score,
    candidates: Vec<ChildScore>,
}

impl BestMove {
    /// Cell to play.
    pub fn position(&self) -> Position {
        self.position
    }

    /// State after playing it.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Value of that state.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Every successor with its value, in row-major order.
    pub fn candidates(&self) -> &[ChildScore] {
        &self.candidates
    }
}

/// Scores every successor of `state` with `search` and keeps the best one
/// for `state.next_to_play()`.
///
/// The max player keeps the highest score, the min player the lowest. Ties
/// go to the first successor in row-major order; among several wins the
/// first one found is kept, not the fastest, since wins are not discounted
/// by depth.
///
/// Each child is searched with the searcher's own window; alpha-beta bounds
/// are not shared between root children so every candidate score is exact.
///
/// # Errors
///
/// [`SearchError::TerminalState`] if `state` has no successors.
pub fn select_best_move<S>(
    search: &S,
    state: &State,
    stats: &mut SearchStats,
) -> Result<BestMove, SearchError>
where
    S: Search + ?Sized,
{
    let mover = state.next_to_play();
    let mut candidates = Vec::new();
    let mut best: Option<(Position, State, Score)> = None;

    for (position, child) in state.successors() {
        let child_score = search.score(&child, stats);
        trace!(%position, score = child_score, "Child scored");
        candidates.push(ChildScore::new(position, child_score));

        let improves = match &best {
            None => true,
            Some((_, _, best_score)) => score::is_better(child_score, *best_score, mover),
        };
        if improves {
            best = Some((position, child, child_score));
        }
    }

    let (position, state, score) = best.ok_or(SearchError::TerminalState)?;
    Ok(BestMove {
        position,
        state,
        score,
        candidates,
    })
}
