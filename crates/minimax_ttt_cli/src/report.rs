//! Position analysis and strategy comparison reports.

use minimax_ttt::{
    Board, ChildScore, Mark, Outcome, Position, Score, SearchEngine, SearchError, SearchMode,
    SearchStats, State,
};
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Builds a search state from board notation.
///
/// When `just_played` is omitted it is inferred from the mark counts: the
/// side with more marks moved last, and an empty board is handed to `O`.
///
/// # Errors
///
/// Fails on malformed notation, on equal non-zero counts without an explicit
/// mover, and on any unreachable position.
#[instrument]
pub fn parse_state(board: &str, just_played: Option<Mark>) -> anyhow::Result<State> {
    let board: Board = board.parse()?;
    let just_played = match just_played {
        Some(mark) => Some(mark),
        None => infer_last_mover(&board)?,
    };
    let state = match just_played {
        Some(mark) => State::from_parts(board, Some(mark), mark.opponent())?,
        None => State::initial(Mark::O),
    };
    debug!(%state, "Parsed state");
    Ok(state)
}

fn infer_last_mover(board: &Board) -> anyhow::Result<Option<Mark>> {
    let (x, o) = (board.count(Mark::X), board.count(Mark::O));
    match x.cmp(&o) {
        std::cmp::Ordering::Greater => Ok(Some(Mark::X)),
        std::cmp::Ordering::Less => Ok(Some(Mark::O)),
        std::cmp::Ordering::Equal if x == 0 => Ok(None),
        std::cmp::Ordering::Equal => {
            anyhow::bail!("Both players have {} marks; pass --just-played to say who moved last", x)
        }
    }
}

/// Evaluation of a single position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Position analyzed.
    pub state: State,
    /// Strategy used.
    pub mode: SearchMode,
    /// Game value of the position.
    pub value: Score,
    /// Result if the position is already decided.
    pub outcome: Option<Outcome>,
    /// Recommended cell for the player to move.
    pub best_move: Option<Position>,
    /// Every candidate with its value.
    pub candidates: Vec<ChildScore>,
    /// Work done by the whole analysis.
    pub stats: SearchStats,
}

/// Evaluates `state` and, unless it is terminal, picks the best move.
///
/// # Errors
///
/// [`SearchError::InvalidState`] if the state breaks an invariant.
#[instrument(skip(state), fields(state = %state))]
pub fn analyze(state: &State, mode: SearchMode) -> Result<Analysis, SearchError> {
    let mut engine = SearchEngine::new(mode);
    let value = engine.evaluate(state)?;
    let (best_move, candidates) = match engine.best_move(state) {
        Ok(best) => (Some(best.position()), best.candidates().to_vec()),
        Err(SearchError::TerminalState) => (None, Vec::new()),
        Err(e) => return Err(e),
    };
    Ok(Analysis {
        state: *state,
        mode,
        value,
        outcome: state.outcome(),
        best_move,
        candidates,
        stats: engine.stats(),
    })
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.state.board().display_grid())?;
        writeln!(f)?;
        writeln!(f, "State:   {}", self.state)?;
        writeln!(f, "Mode:    {}", self.mode)?;
        writeln!(f, "Value:   {}", self.value)?;
        match (self.outcome, self.best_move) {
            (Some(outcome), _) => writeln!(f, "Outcome: {}", outcome)?,
            (None, Some(position)) => {
                writeln!(f, "Best:    {} for {}", position, self.state.next_to_play())?;
                for candidate in &self.candidates {
                    writeln!(f, "  {:<22} {:>3}", candidate.position.to_string(), candidate.score)?;
                }
            }
            (None, None) => {}
        }
        write!(
            f,
            "Nodes:   {} visited, {} cutoffs",
            self.stats.nodes_visited, self.stats.cutoffs
        )
    }
}

/// One strategy's result in a [`Comparison`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    /// Strategy.
    pub mode: SearchMode,
    /// Value it computed.
    pub value: Score,
    /// Work it did.
    pub stats: SearchStats,
}

/// Both strategies run on the same position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Position searched.
    pub state: State,
    /// One row per strategy.
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// True when every strategy computed the same value.
    pub fn values_agree(&self) -> bool {
        self.rows.windows(2).all(|w| w[0].value == w[1].value)
    }
}

/// Runs every [`SearchMode`] on `state`.
///
/// # Errors
///
/// [`SearchError::InvalidState`] if the state breaks an invariant.
#[instrument(skip(state), fields(state = %state))]
pub fn compare(state: &State) -> Result<Comparison, SearchError> {
    let mut rows = Vec::new();
    for mode in SearchMode::iter() {
        let mut engine = SearchEngine::new(mode);
        let value = engine.evaluate(state)?;
        rows.push(ComparisonRow {
            mode,
            value,
            stats: engine.stats(),
        });
    }
    Ok(Comparison {
        state: *state,
        rows,
    })
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "State: {}", self.state)?;
        writeln!(f, "{:<12} {:>6} {:>10} {:>8}", "mode", "value", "nodes", "cutoffs")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<12} {:>6} {:>10} {:>8}",
                row.mode.to_string(),
                row.value,
                row.stats.nodes_visited,
                row.stats.cutoffs
            )?;
        }
        if self.values_agree() {
            write!(f, "Values agree.")
        } else {
            write!(f, "Values DISAGREE.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_ttt::score::MIN_WIN;

    #[test]
    fn test_parse_state_infers_mover() {
        let state = parse_state("X../.O./..X", None).unwrap();
        assert_eq!(state.just_played(), Some(Mark::X));
        assert_eq!(state.next_to_play(), Mark::O);

        let state = parse_state("XO./.O./...", None).unwrap();
        assert_eq!(state.just_played(), Some(Mark::O));
        assert_eq!(state.next_to_play(), Mark::X);

        let root = parse_state(".../.../...", None).unwrap();
        assert_eq!(root, State::initial(Mark::O));
    }

    #[test]
    fn test_parse_state_needs_mover_on_equal_counts() {
        assert!(parse_state("XO./.../...", None).is_err());
        let state = parse_state("XO./.../...", Some(Mark::O)).unwrap();
        assert_eq!(state.next_to_play(), Mark::X);
    }

    #[test]
    fn test_analyze_concrete_scenario() {
        let state = parse_state("XXO/XOX/.OO", Some(Mark::O)).unwrap();
        let analysis = analyze(&state, SearchMode::Minimax).unwrap();
        assert_eq!(analysis.value, MIN_WIN);
        assert_eq!(analysis.best_move, Some(Position::BottomLeft));
        assert_eq!(analysis.outcome, None);
        assert!(analysis.to_string().contains("Best:    Bottom-left (2, 0) for X"));
    }

    #[test]
    fn test_analyze_terminal_state() {
        let state = parse_state("OOO/XX./X..", Some(Mark::O)).unwrap();
        let analysis = analyze(&state, SearchMode::AlphaBeta).unwrap();
        assert_eq!(analysis.value, 10);
        assert_eq!(analysis.best_move, None);
        assert_eq!(analysis.outcome, Some(Outcome::Winner(Mark::O)));
    }

    #[test]
    fn test_compare_runs_both_modes() {
        let state = parse_state("X../.O./..X", None).unwrap();
        let comparison = compare(&state).unwrap();
        assert_eq!(comparison.rows.len(), 2);
        assert!(comparison.values_agree());
        let minimax = comparison.rows[0];
        let alpha_beta = comparison.rows[1];
        assert_eq!(minimax.mode, SearchMode::Minimax);
        assert!(alpha_beta.stats.nodes_visited < minimax.stats.nodes_visited);
    }
}
