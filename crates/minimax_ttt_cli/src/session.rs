//! Console game session: one human, one machine, one board.

use crate::cli::FirstPlayer;
use minimax_ttt::{
    BestMove, Mark, MoveError, Outcome, Position, SearchEngine, SearchError, SearchMode, State,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Mark the human plays with.
pub const HUMAN_MARK: Mark = Mark::O;

/// Mark the machine plays with.
pub const MACHINE_MARK: Mark = Mark::X;

/// Which side made a recorded move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The console user.
    Human,
    /// The search engine.
    Machine,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Machine => write!(f, "Machine"),
        }
    }
}

/// A move in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Who moved.
    pub side: Side,
    /// Cell that was filled.
    pub position: Position,
}

/// Error raised by a session move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SessionError {
    /// It is the other side's turn.
    #[display("It is not the {}'s turn", _0)]
    #[from(ignore)]
    NotYourTurn(#[error(not(source))] Side),

    /// The move itself was illegal.
    #[display("{}", _0)]
    Move(MoveError),

    /// The engine could not choose a move.
    #[display("{}", _0)]
    Search(SearchError),
}

/// Everything one console game needs.
///
/// The human always plays `O` and the machine always plays `X`; only the
/// opening player varies.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: State,
    engine: SearchEngine,
    history: Vec<MoveRecord>,
}

impl GameSession {
    /// Starts a game with an empty board.
    #[instrument]
    pub fn new(first: FirstPlayer, mode: SearchMode) -> Self {
        let opener = match first {
            FirstPlayer::Human => HUMAN_MARK,
            FirstPlayer::Machine => MACHINE_MARK,
        };
        info!(%opener, %mode, "Starting game session");
        Self {
            state: State::initial(opener),
            engine: SearchEngine::new(mode),
            history: Vec::new(),
        }
    }

    /// Current position.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The machine's engine, including its cumulative statistics.
    pub fn engine(&self) -> &SearchEngine {
        &self.engine
    }

    /// Moves made so far, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// How the game ended, if it has.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// True when the game is still running and the human is to move.
    pub fn is_human_turn(&self) -> bool {
        !self.state.is_terminal() && self.state.next_to_play() == HUMAN_MARK
    }

    /// True when the game is still running and the machine is to move.
    pub fn is_machine_turn(&self) -> bool {
        !self.state.is_terminal() && self.state.next_to_play() == MACHINE_MARK
    }

    /// Records the human's move.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Move`] if the game is over or the cell is taken
    /// - [`SessionError::NotYourTurn`] if the machine is to move
    #[instrument(skip(self), fields(position = %position))]
    pub fn human_move(&mut self, position: Position) -> Result<(), SessionError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver.into());
        }
        if !self.is_human_turn() {
            warn!("Human tried to move on the machine's turn");
            return Err(SessionError::NotYourTurn(Side::Human));
        }
        self.state.play(position)?;
        self.history.push(MoveRecord {
            side: Side::Human,
            position,
        });
        debug!(state = %self.state, "Human moved");
        Ok(())
    }

    /// Lets the engine choose and play the machine's move using `mode`.
    ///
    /// # Errors
    ///
    /// - [`SessionError::Move`] if the game is over
    /// - [`SessionError::NotYourTurn`] if the human is to move
    #[instrument(skip(self))]
    pub fn machine_move(&mut self, mode: SearchMode) -> Result<BestMove, SessionError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver.into());
        }
        if !self.is_machine_turn() {
            return Err(SessionError::NotYourTurn(Side::Machine));
        }
        self.engine.set_mode(mode);
        let best = self.engine.best_move(&self.state)?;
        self.state = *best.state();
        self.history.push(MoveRecord {
            side: Side::Machine,
            position: best.position(),
        });
        info!(position = %best.position(), score = best.score(), "Machine moved");
        Ok(best)
    }
}
