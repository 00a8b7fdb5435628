//! Tic-tac-toe game-tree search.
//!
//! Exhaustive search over the 3x3 game: a value-typed [`State`] that knows
//! how to detect wins and draws and enumerate its successors, and two
//! interchangeable strategies, plain [`minimax`] and [`alphabeta`], which
//! always agree on the value of a state.
//!
//! # Sign convention
//!
//! `O` is the max player and `X` the min player. A terminal state is worth
//! `+10` when `O` just completed a line, `-10` when `X` did and `0` on a
//! draw. Values are not discounted by depth.
//!
//! # Example
//!
//! ```
//! use minimax_ttt::{alphabeta, minimax, Mark, SearchEngine, SearchMode, State};
//!
//! let root = State::initial(Mark::O);
//! assert_eq!(minimax(&root), 0);
//! assert_eq!(alphabeta(&root), 0);
//!
//! let mut engine = SearchEngine::new(SearchMode::AlphaBeta);
//! let best = engine.best_move(&root)?;
//! assert_eq!(best.score(), 0);
//! # Ok::<(), minimax_ttt::SearchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod invariants;
mod position;
pub mod rules;
pub mod score;
pub mod search;
mod state;
mod types;

// Crate-level exports - Core types
pub use position::Position;
pub use state::{Outcome, State, Successors};
pub use types::{Board, Cell, Mark};

// Crate-level exports - Errors
pub use error::{MoveError, ParseBoardError, SearchError, StateError};

// Crate-level exports - Search
pub use score::Score;
pub use search::{
    alphabeta, alphabeta_counted, alphabeta_with_bounds, minimax, minimax_counted,
    select_best_move, AlphaBeta, BestMove, ChildScore, Minimax, Search, SearchEngine, SearchMode,
    SearchStats,
};
