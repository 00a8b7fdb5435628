//! Scripted console games against the engine.

use minimax_ttt::{Mark, Outcome, SearchMode};
use minimax_ttt_cli::{Console, FirstPlayer, GameSession, ModeChoice, PlayOptions, Side};

/// Cell numbers 1-9, cycled; the console rejects occupied cells and
/// re-prompts, so the human always ends up taking some free cell.
fn naive_script() -> String {
    (0..5)
        .flat_map(|_| 1..=9)
        .map(|n| format!("{}\n", n))
        .collect()
}

fn play(first: FirstPlayer, mode: ModeChoice, show: bool) -> (GameSession, Option<Outcome>, String) {
    let script = naive_script();
    let mut session = GameSession::new(first, SearchMode::AlphaBeta);
    let mut console = Console::new(script.as_bytes(), Vec::new());
    let outcome = console
        .play(
            &mut session,
            PlayOptions {
                mode,
                show_child_scores: show,
            },
        )
        .unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();
    (session, outcome, output)
}

#[test]
fn test_machine_never_loses_when_human_opens() {
    let (session, outcome, output) = play(FirstPlayer::Human, ModeChoice::Minimax, false);
    let outcome = outcome.expect("game should finish");
    assert_ne!(outcome, Outcome::Winner(Mark::O));
    assert_eq!(session.outcome(), Some(outcome));
    assert_eq!(session.history().first().map(|m| m.side), Some(Side::Human));
    assert!(output.contains("Machine is thinking (minimax)..."));
}

#[test]
fn test_machine_never_loses_when_machine_opens() {
    let (session, outcome, output) = play(FirstPlayer::Machine, ModeChoice::AlphaBeta, false);
    let outcome = outcome.expect("game should finish");
    assert_ne!(outcome, Outcome::Winner(Mark::O));
    assert_eq!(session.history().first().map(|m| m.side), Some(Side::Machine));
    if outcome.is_draw() {
        assert!(output.contains("It's a draw!"));
    } else {
        assert_eq!(outcome.winner(), Some(Mark::X));
        assert!(output.contains("Machine wins!"));
        assert!(output.contains("Winning line:"));
    }
}

#[test]
fn test_history_alternates_sides() {
    let (session, _, _) = play(FirstPlayer::Human, ModeChoice::AlphaBeta, false);
    for pair in session.history().windows(2) {
        assert_ne!(pair[0].side, pair[1].side);
    }
    let filled = 9 - session.state().board().empty_positions().len();
    assert_eq!(session.history().len(), filled);
}

#[test]
fn test_child_scores_are_printed_on_request() {
    let (_, _, output) = play(FirstPlayer::Machine, ModeChoice::AlphaBeta, true);
    // The opening move lists all nine candidates, each a draw.
    assert!(output.contains("  Top-left (0, 0)          0"));
    assert!(output.contains("  Bottom-right (2, 2)      0"));
}
