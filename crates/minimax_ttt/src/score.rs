//! Score conventions.
//!
//! Scores are seen from a fixed side: positive favours `O` (max player),
//! negative favours `X` (min player). Terminal scores are exactly
//! [`MAX_WIN`], [`MIN_WIN`] or [`DRAW`]; nothing in between is produced.

use crate::Mark;

/// Game-theoretic value of a state.
pub type Score = i32;

/// `O` (max player) has won.
pub const MAX_WIN: Score = 10;

/// `X` (min player) has won.
pub const MIN_WIN: Score = -10;

/// Nobody won.
pub const DRAW: Score = 0;

/// Lower end of the unbounded alpha-beta window.
pub const NEG_INFINITY: Score = Score::MIN;

/// Upper end of the unbounded alpha-beta window.
pub const INFINITY: Score = Score::MAX;

/// Score credited when `mark` completes a line.
pub fn win_score(mark: Mark) -> Score {
    if mark.is_maximizer() { MAX_WIN } else { MIN_WIN }
}

/// The starting "best so far" for `mark`: worse than any real score.
pub fn worst_score(mark: Mark) -> Score {
    if mark.is_maximizer() { NEG_INFINITY } else { INFINITY }
}

/// Strict improvement from `mark`'s point of view.
pub fn is_better(new: Score, old: Score, mark: Mark) -> bool {
    if mark.is_maximizer() { new > old } else { new < old }
}
