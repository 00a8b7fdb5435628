//! Exhaustive game-tree search.
//!
//! Two interchangeable strategies share the min/max alternation: plain
//! [`Minimax`] and [`AlphaBeta`]. Both are pure functions of the state;
//! the only thing threaded through the recursion besides the state is a
//! [`SearchStats`] counter (and, for alpha-beta, the window).
//!
//! Everything here is single threaded. Root children are independent for
//! plain minimax, but evaluating them in parallel would lose the bound
//! sharing that alpha-beta relies on for its cutoffs.

pub mod alpha_beta;
pub mod minimax;
pub mod selection;

pub use alpha_beta::{alphabeta, alphabeta_counted, alphabeta_with_bounds, AlphaBeta};
pub use minimax::{minimax, minimax_counted, Minimax};
pub use selection::{select_best_move, BestMove, ChildScore};

use crate::error::SearchError;
use crate::score::Score;
use crate::State;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A strategy that computes the game value of a state.
pub trait Search {
    /// Value of `state`, recording work done in `stats`.
    fn score(&self, state: &State, stats: &mut SearchStats) -> Score;
}

/// Work counters for one or more searches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// States entered by the recursion, root included.
    pub nodes_visited: u64,
    /// Sibling loops abandoned because `alpha >= beta`.
    pub cutoffs: u64,
}

impl SearchStats {
    /// Adds another run's counters to this one.
    pub fn absorb(&mut self, other: SearchStats) {
        self.nodes_visited += other.nodes_visited;
        self.cutoffs += other.cutoffs;
    }
}

/// Which search strategy to run.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SearchMode {
    /// Full minimax.
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
}

/// Runs the selected strategy with its default configuration.
impl Search for SearchMode {
    fn score(&self, state: &State, stats: &mut SearchStats) -> Score {
        match self {
            SearchMode::Minimax => Minimax.score(state, stats),
            SearchMode::AlphaBeta => AlphaBeta::default().score(state, stats),
        }
    }
}

/// Search entry point for callers holding untrusted states.
///
/// Validates every state before searching and accumulates statistics
/// across calls until [`SearchEngine::reset_stats`].
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    mode: SearchMode,
    stats: SearchStats,
}

impl SearchEngine {
    /// Creates an engine running `mode`.
    pub fn new(mode: SearchMode) -> Self {
        Self {
            mode,
            stats: SearchStats::default(),
        }
    }

    /// The configured strategy.
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Switches strategy; statistics are kept.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// Counters accumulated since creation or the last reset.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Clears the counters.
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Game value of `state`.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidState`] if the state breaks an invariant.
    #[instrument(skip(self, state), fields(mode = %self.mode, state = %state))]
    pub fn evaluate(&mut self, state: &State) -> Result<Score, SearchError> {
        state.validate()?;
        let mut run = SearchStats::default();
        let score = self.mode.score(state, &mut run);
        self.stats.absorb(run);
        debug!(score, nodes = run.nodes_visited, cutoffs = run.cutoffs, "State evaluated");
        Ok(score)
    }

    /// Best move for `state.next_to_play()`.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidState`] if the state breaks an invariant
    /// - [`SearchError::TerminalState`] if the game is already decided
    #[instrument(skip(self, state), fields(mode = %self.mode, state = %state))]
    pub fn best_move(&mut self, state: &State) -> Result<BestMove, SearchError> {
        state.validate()?;
        let mut run = SearchStats::default();
        let best = select_best_move(&self.mode, state, &mut run)?;
        self.stats.absorb(run);
        info!(
            position = %best.position(),
            score = best.score(),
            nodes = run.nodes_visited,
            "Best move selected"
        );
        Ok(best)
    }
}
