use crate::core::Direction::*;
use crate::core::HistoryLog;
use crate::test::test_util::PuzzleFixture;

const LEVEL: &str = r#"
#####
#@  #
#   #
#####
"#;

#[test]
fn empty_log_has_no_cursor_and_nothing_to_swap() {
    let mut log = HistoryLog::new();
    assert!(log.is_empty());
    assert_eq!(log.cursor(), None);
    assert!(log.undo().is_none());
    assert!(log.redo().is_none());
}

#[test]
fn reset_seeds_entry_zero() {
    let game = PuzzleFixture::new(LEVEL);
    let mut log = HistoryLog::new();
    log.reset(&game.state);

    assert_eq!(log.len(), 1);
    assert_eq!(log.cursor(), Some(0));
    assert_eq!(log.current(), Some(&game.state));
}

#[test]
fn record_appends_and_advances_cursor() {
    let mut game = PuzzleFixture::new(LEVEL);
    let mut log = HistoryLog::new();
    log.reset(&game.state);

    game.assert_move(Right);
    log.record(&game.state);
    game.assert_move(Right);
    log.record(&game.state);

    assert_eq!(log.len(), 3);
    assert_eq!(log.cursor(), Some(2));
}

#[test]
fn undo_restores_the_exact_prior_state() {
    let mut game = PuzzleFixture::new(LEVEL);
    let mut log = HistoryLog::new();
    log.reset(&game.state);
    let initial = game.state.clone();

    game.assert_move(Right);
    log.record(&game.state);

    let prior = log.undo().expect("one entry to undo").clone();
    assert_eq!(prior, initial);
    assert_eq!(log.cursor(), Some(0));

    // Already at the oldest entry.
    assert!(log.undo().is_none());
    assert_eq!(log.cursor(), Some(0));
}

#[test]
fn redo_restores_the_undone_state_and_stops_at_newest() {
    let mut game = PuzzleFixture::new(LEVEL);
    let mut log = HistoryLog::new();
    log.reset(&game.state);

    game.assert_move(Right);
    log.record(&game.state);
    let after_move = game.state.clone();

    log.undo().expect("undo");
    let redone = log.redo().expect("redo").clone();
    assert_eq!(redone, after_move);
    assert_eq!(log.cursor(), Some(1));

    assert!(log.redo().is_none());
    assert_eq!(log.cursor(), Some(1));
}

#[test]
fn record_after_undo_discards_the_redo_branch() {
    let mut game = PuzzleFixture::new(LEVEL);
    let mut log = HistoryLog::new();
    log.reset(&game.state);

    game.assert_move(Right);
    log.record(&game.state);
    log.undo().expect("undo");

    // A different move supersedes the undone branch.
    let mut other = PuzzleFixture::new(LEVEL);
    other.assert_move(Down);
    log.record(&other.state);

    assert_eq!(log.len(), 2);
    assert_eq!(log.cursor(), Some(1));
    assert!(log.redo().is_none());
}

#[test]
fn entries_never_alias_the_live_state() {
    let mut game = PuzzleFixture::new(LEVEL);
    let mut log = HistoryLog::new();
    log.reset(&game.state);
    let seeded = game.state.clone();

    // Mutating the live state must not reach into the recorded entry.
    game.assert_move(Right);
    assert_eq!(log.current(), Some(&seeded));
    assert_ne!(log.current(), Some(&game.state));
}

#[test]
fn reset_clears_prior_entries() {
    let mut game = PuzzleFixture::new(LEVEL);
    let mut log = HistoryLog::new();
    log.reset(&game.state);

    game.assert_move(Right);
    log.record(&game.state);

    let fresh = PuzzleFixture::new(LEVEL);
    log.reset(&fresh.state);
    assert_eq!(log.len(), 1);
    assert_eq!(log.cursor(), Some(0));
    assert!(log.undo().is_none());
    assert!(log.redo().is_none());
}
