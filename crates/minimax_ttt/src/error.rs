//! Error types for state construction, moves and search.

use crate::invariants::InvariantViolation;
use crate::Position;

/// Error that can occur when applying a move to a state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// A state violated one or more structural invariants.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid state: {}", describe(violations))]
pub struct StateError {
    /// Every invariant that failed.
    #[error(not(source))]
    pub violations: Vec<InvariantViolation>,
}

impl StateError {
    /// Creates a state error from a non-empty list of violations.
    pub fn new(violations: Vec<InvariantViolation>) -> Self {
        Self { violations }
    }
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error returned by the search engine entry points.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SearchError {
    /// The state handed to the engine is not a reachable position.
    #[display("{}", _0)]
    InvalidState(StateError),

    /// A best move was requested for a finished game.
    #[display("State is terminal; there is no move to choose")]
    #[from(ignore)]
    TerminalState,
}

/// Error parsing the compact board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// Notation must have exactly three rows.
    #[display("Expected 3 rows separated by '/', found {}", _0)]
    RowCount(#[error(not(source))] usize),

    /// A row did not contain exactly three cells.
    #[display("Row {} has {} cells, expected 3", row, len)]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        len: usize,
    },

    /// Unrecognised cell symbol.
    #[display("Unknown cell symbol {:?}", _0)]
    Symbol(#[error(not(source))] char),
}
