//! Console front end for the minimax_ttt search engine.
//!
//! Holds a [`GameSession`] in place of global game state and drives it
//! through a [`Console`] over arbitrary input and output streams.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod report;
pub mod session;

pub use cli::{Cli, Command, FirstPlayer, ModeChoice};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use console::{Console, PlayOptions};
pub use report::{analyze, compare, parse_state, Analysis, Comparison, ComparisonRow};
pub use session::{GameSession, MoveRecord, SessionError, Side, HUMAN_MARK, MACHINE_MARK};
