//! Mark balance invariant: X and O counts track strict alternation.

use super::Invariant;
use crate::State;

/// Invariant: mark counts differ by at most one, and the player who just
/// moved never has fewer marks than the other.
pub struct MarkBalanceInvariant;

impl Invariant<State> for MarkBalanceInvariant {
    fn holds(state: &State) -> bool {
        let board = state.board();
        match state.just_played() {
            Some(mover) => {
                let mine = board.count(mover);
                let theirs = board.count(mover.opponent());
                mine >= theirs && mine - theirs <= 1
            }
            None => board.is_blank(),
        }
    }

    fn description() -> &'static str {
        "Mark counts differ by at most one and the last mover is not behind"
    }
}
