//! Alternating turn invariant: the mover and the player to move differ.

use super::Invariant;
use crate::State;

/// Invariant: `next_to_play` is the opponent of `just_played`.
///
/// A state without a prior mover must have an empty board.
pub struct AlternatingTurnInvariant;

impl Invariant<State> for AlternatingTurnInvariant {
    fn holds(state: &State) -> bool {
        match state.just_played() {
            Some(mover) => mover.opponent() == state.next_to_play(),
            None => state.board().is_blank(),
        }
    }

    fn description() -> &'static str {
        "Players alternate: the player to move is not the player who just moved"
    }
}
