//! Settled winner invariant: nobody moves after losing.

use super::Invariant;
use crate::State;

/// Invariant: the player about to move has not completed a line.
///
/// Only the last mover can complete a line, so a line belonging to
/// `next_to_play` means play continued past the end of the game.
pub struct SettledWinnerInvariant;

impl Invariant<State> for SettledWinnerInvariant {
    fn holds(state: &State) -> bool {
        !state.board().has_line(state.next_to_play())
    }

    fn description() -> &'static str {
        "The player to move has not already completed a line"
    }
}
