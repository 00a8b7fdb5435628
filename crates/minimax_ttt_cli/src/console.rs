//! Line-oriented console game loop.
//!
//! Reads from any [`BufRead`] and writes to any [`Write`], so a scripted
//! game can be driven from a byte slice in tests.

use crate::cli::ModeChoice;
use crate::session::{GameSession, HUMAN_MARK, MACHINE_MARK};
use minimax_ttt::{Outcome, Position, SearchMode};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};

/// Per-game settings resolved from the config file and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOptions {
    /// Strategy for machine turns.
    pub mode: ModeChoice,
    /// Print every candidate and its score before the machine moves.
    pub show_child_scores: bool,
}

/// Console front end over an input and output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps the two streams.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays `session` to the end.
    ///
    /// Returns `None` if the input ran out before the game finished.
    #[instrument(skip(self, session))]
    pub fn play(
        &mut self,
        session: &mut GameSession,
        options: PlayOptions,
    ) -> anyhow::Result<Option<Outcome>> {
        writeln!(
            self.output,
            "You play {}, the machine plays {}.",
            HUMAN_MARK, MACHINE_MARK
        )?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", session.state().board().display_grid())?;

            if let Some(outcome) = session.outcome() {
                self.announce(session, outcome)?;
                return Ok(Some(outcome));
            }

            if session.is_human_turn() {
                let Some(line) = self.prompt("Your move (row col, or 1-9): ")? else {
                    info!("Input closed during human turn");
                    return Ok(None);
                };
                let Some(position) = Position::parse_input(&line) else {
                    writeln!(self.output, "Could not read {:?} as a cell.", line)?;
                    continue;
                };
                if let Err(e) = session.human_move(position) {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
                writeln!(self.output, "You play {}", position)?;
            } else {
                let mode = match options.mode.fixed() {
                    Some(mode) => mode,
                    None => match self.ask_mode()? {
                        Some(mode) => mode,
                        None => {
                            info!("Input closed while choosing search mode");
                            return Ok(None);
                        }
                    },
                };
                writeln!(self.output, "Machine is thinking ({})...", mode)?;
                let before = session.engine().stats();
                let best = session.machine_move(mode)?;
                let after = session.engine().stats();

                if options.show_child_scores {
                    for candidate in best.candidates() {
                        writeln!(
                            self.output,
                            "  {:<22} {:>3}",
                            candidate.position.to_string(),
                            candidate.score
                        )?;
                    }
                }
                debug!(
                    nodes = after.nodes_visited - before.nodes_visited,
                    cutoffs = after.cutoffs - before.cutoffs,
                    "Machine search finished"
                );
                writeln!(self.output, "Machine plays {}", best.position())?;
            }
        }
    }

    /// Asks whether to prune. `None` at end of input.
    fn ask_mode(&mut self) -> io::Result<Option<SearchMode>> {
        loop {
            let Some(answer) = self.prompt("Use alpha-beta pruning? (y/n): ")? else {
                return Ok(None);
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(SearchMode::AlphaBeta)),
                "n" | "no" => return Ok(Some(SearchMode::Minimax)),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    /// Prints `text` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn announce(&mut self, session: &GameSession, outcome: Outcome) -> io::Result<()> {
        match outcome.winner() {
            Some(mark) => {
                let who = if mark == HUMAN_MARK { "You win" } else { "Machine wins" };
                writeln!(self.output, "{}!", who)?;
                if let Some(line) = session.state().winning_line() {
                    let cells: Vec<String> = line.iter().map(|p| p.to_string()).collect();
                    writeln!(self.output, "Winning line: {}", cells.join(", "))?;
                }
            }
            None => writeln!(self.output, "It's a draw!")?,
        }
        info!(%outcome, moves = session.history().len(), "Game over");
        Ok(())
    }
}
