//! minimax_ttt - play and analyze tic-tac-toe from the console.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use minimax_ttt::{Mark, SearchMode};
use minimax_ttt_cli::{
    analyze, compare, parse_state, AppConfig, Cli, Command, Console, FirstPlayer, GameSession,
    ModeChoice, PlayOptions,
};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,minimax_ttt=debug")),
        )
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            first,
            mode,
            show_scores,
        } => run_play(&config, first, mode, show_scores),
        Command::Analyze {
            board,
            just_played,
            mode,
            json,
        } => run_analyze(&board, just_played, mode, json),
        Command::Compare {
            board,
            just_played,
            json,
        } => run_compare(&board, just_played, json),
    }
}

/// Play an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(
    config: &AppConfig,
    first: Option<FirstPlayer>,
    mode: Option<ModeChoice>,
    show_scores: bool,
) -> Result<()> {
    let first = first.unwrap_or_else(|| config.first_player());
    let mode = mode.unwrap_or(*config.default_mode());
    let options = PlayOptions {
        mode,
        show_child_scores: show_scores || *config.show_child_scores(),
    };
    info!(?first, ?mode, "Starting console game");

    let mut session = GameSession::new(first, mode.fixed().unwrap_or_default());
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    if console.play(&mut session, options)?.is_none() {
        info!("Game abandoned");
    }
    Ok(())
}

/// Analyze one position
#[instrument]
fn run_analyze(board: &str, just_played: Option<Mark>, mode: SearchMode, json: bool) -> Result<()> {
    let state = parse_state(board, just_played)?;
    let analysis = analyze(&state, mode)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", analysis);
    }
    Ok(())
}

/// Compare both strategies on one position
#[instrument]
fn run_compare(board: &str, just_played: Option<Mark>, json: bool) -> Result<()> {
    let state = parse_state(board, just_played)?;
    let comparison = compare(&state)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
    } else {
        println!("{}", comparison);
    }
    Ok(())
}
