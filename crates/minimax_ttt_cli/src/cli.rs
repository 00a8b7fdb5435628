//! Command-line interface for minimax_ttt.

use clap::{Parser, Subcommand, ValueEnum};
use minimax_ttt::{Mark, SearchMode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Minimax tic-tac-toe - exhaustive game-tree search
#[derive(Parser, Debug)]
#[command(name = "minimax_ttt")]
#[command(about = "Play or analyze tic-tac-toe with exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./minimax_ttt.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game against the machine on the console
    Play {
        /// Who moves first (overrides the config file)
        #[arg(long, value_enum)]
        first: Option<FirstPlayer>,

        /// Search strategy for machine turns (overrides the config file)
        #[arg(long, value_enum)]
        mode: Option<ModeChoice>,

        /// Print every candidate move with its score before the machine plays
        #[arg(long)]
        show_scores: bool,
    },

    /// Evaluate a position and report the best move
    Analyze {
        /// Board in row notation, e.g. "XXO/XOX/.OO"
        board: String,

        /// Player who made the last move (inferred from mark counts when omitted)
        #[arg(long)]
        just_played: Option<Mark>,

        /// Search strategy
        #[arg(long, default_value_t = SearchMode::AlphaBeta)]
        mode: SearchMode,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run both strategies on one position and compare their work
    Compare {
        /// Board in row notation (defaults to the empty board)
        #[arg(default_value = ".../.../...")]
        board: String,

        /// Player who made the last move (inferred from mark counts when omitted)
        #[arg(long)]
        just_played: Option<Mark>,

        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Who opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human moves first.
    Human,
    /// The machine moves first.
    Machine,
}

/// How the machine picks its search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeChoice {
    /// Always plain minimax.
    Minimax,
    /// Always alpha-beta.
    AlphaBeta,
    /// Ask on the console before every machine turn.
    Ask,
}

impl ModeChoice {
    /// The fixed strategy, or `None` when the user is asked each turn.
    pub fn fixed(self) -> Option<SearchMode> {
        match self {
            ModeChoice::Minimax => Some(SearchMode::Minimax),
            ModeChoice::AlphaBeta => Some(SearchMode::AlphaBeta),
            ModeChoice::Ask => None,
        }
    }
}
