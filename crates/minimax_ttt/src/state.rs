//! Search states: a board plus the two players' roles.
//!
//! A [`State`] is a value. Successors are produced lazily by copying the
//! board and writing one mark, so the game tree is never stored; the search
//! recursion walks it depth first on the call stack.

use crate::error::{MoveError, StateError};
use crate::invariants;
use crate::score::{self, Score};
use crate::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line.
    Winner(Mark),
    /// Board filled with no line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// The unit of search.
///
/// Invariants (checked by [`State::from_parts`], preserved by
/// [`State::children`] and [`State::play`]):
/// - `next_to_play` is the opponent of `just_played`
/// - `just_played` is `None` only on an empty board
/// - mark counts differ by at most one, the last mover not behind
/// - the player to move has not completed a line
///
/// Deserialisation goes through [`State::from_parts`], so a decoded state
/// is as trustworthy as a constructed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawState")]
pub struct State {
    board: Board,
    just_played: Option<Mark>,
    next_to_play: Mark,
}

impl State {
    /// The starting position: empty board, no prior mover.
    pub fn initial(first_to_play: Mark) -> Self {
        Self {
            board: Board::new(),
            just_played: None,
            next_to_play: first_to_play,
        }
    }

    /// Builds a state from its parts, rejecting anything unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`StateError`] listing every violated invariant.
    #[instrument(skip(board), fields(board = %board))]
    pub fn from_parts(
        board: Board,
        just_played: Option<Mark>,
        next_to_play: Mark,
    ) -> Result<Self, StateError> {
        let state = Self::unchecked(board, just_played, next_to_play);
        state.validate()?;
        Ok(state)
    }

    /// Builds a state without validating it.
    pub(crate) fn unchecked(board: Board, just_played: Option<Mark>, next_to_play: Mark) -> Self {
        Self {
            board,
            just_played,
            next_to_play,
        }
    }

    /// Re-checks every state invariant.
    pub fn validate(&self) -> Result<(), StateError> {
        invariants::check_state(self).map_err(StateError::new)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark of the player who made the most recent move.
    pub fn just_played(&self) -> Option<Mark> {
        self.just_played
    }

    /// Mark of the player to move next.
    pub fn next_to_play(&self) -> Mark {
        self.next_to_play
    }

    /// True iff `just_played` occupies a complete line.
    ///
    /// Only the last mover can be credited with a win; with no prior mover
    /// this is always false.
    pub fn is_win(&self) -> bool {
        self.winning_line().is_some()
    }

    /// True iff there is no win and no empty cell.
    pub fn is_draw(&self) -> bool {
        !self.is_win() && self.board.is_full()
    }

    /// True iff the game is decided.
    pub fn is_terminal(&self) -> bool {
        self.is_win() || self.is_draw()
    }

    /// The line completed by `just_played`, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.just_played
            .and_then(|mover| self.board.winning_line(mover))
    }

    /// Static score of a terminal state; `None` for a state still in play.
    ///
    /// Wins are not discounted by depth.
    pub fn value(&self) -> Option<Score> {
        match self.outcome()? {
            Outcome::Winner(mark) => Some(score::win_score(mark)),
            Outcome::Draw => Some(score::DRAW),
        }
    }

    /// How the game ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_win() {
            self.just_played.map(Outcome::Winner)
        } else if self.board.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// Successor states paired with the cell that was filled, row-major.
    ///
    /// Empty when the state is terminal.
    pub fn successors(&self) -> Successors<'_> {
        Successors {
            state: self,
            next: if self.is_terminal() { Position::ALL.len() } else { 0 },
        }
    }

    /// Successor states in row-major order of the filled cell.
    pub fn children(&self) -> impl Iterator<Item = State> + '_ {
        self.successors().map(|(_, child)| child)
    }

    /// The state reached by `next_to_play` marking `pos`.
    fn child_at(&self, pos: Position) -> State {
        let mut board = self.board;
        board.set(pos, Cell::Occupied(self.next_to_play));
        State {
            board,
            just_played: Some(self.next_to_play),
            next_to_play: self.next_to_play.opponent(),
        }
    }

    /// Records a move in place: marks `pos` for `next_to_play` and swaps roles.
    ///
    /// This is the front end's way of recording a human move; the search
    /// engine itself never mutates a state.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the state is terminal
    /// - [`MoveError::SquareOccupied`] if `pos` is taken
    #[instrument(skip(self), fields(player = %self.next_to_play))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty_at(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        *self = self.child_at(pos);
        debug!(board = %self.board, "Move recorded");
        Ok(())
    }
}

/// Wire form of [`State`] before validation.
#[derive(Deserialize)]
struct RawState {
    board: Board,
    just_played: Option<Mark>,
    next_to_play: Mark,
}

impl TryFrom<RawState> for State {
    type Error = StateError;

    fn try_from(raw: RawState) -> Result<Self, Self::Error> {
        State::from_parts(raw.board, raw.just_played, raw.next_to_play)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.just_played {
            Some(mover) => write!(
                f,
                "{} ({} just played, {} to play)",
                self.board, mover, self.next_to_play
            ),
            None => write!(f, "{} ({} to play)", self.board, self.next_to_play),
        }
    }
}

/// Lazy iterator over a state's successors.
///
/// Generation is a pure function of the parent, so a state can be
/// re-expanded any number of times.
#[derive(Debug, Clone)]
pub struct Successors<'a> {
    state: &'a State,
    next: usize,
}

impl Iterator for Successors<'_> {
    type Item = (Position, State);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(pos) = Position::from_index(self.next) {
            self.next += 1;
            if self.state.board.is_empty_at(pos) {
                return Some((pos, self.state.child_at(pos)));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(Position::ALL.len().saturating_sub(self.next)))
    }
}
