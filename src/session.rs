use tracing::debug;

use crate::core::{Direction, HistoryLog, MoveOutcome, PuzzleState};
use crate::error::{LevelError, SnapshotError};
use crate::level::parse_level;
use crate::snapshot;

/// One playthrough of one puzzle: the live state plus its undo/redo log.
///
/// This is the command surface an external UI loop drives. Sessions are
/// fully independent owned values; hosting many of them concurrently needs
/// no shared state or locking.
#[derive(Clone, Debug)]
pub struct Session {
    state: PuzzleState,
    history: HistoryLog,
}

impl Session {
    /// Parses `level_text` and seeds the history with the initial state as
    /// entry 0.
    pub fn new(level_text: &str) -> Result<Self, LevelError> {
        let state = parse_level(level_text)?;
        let mut history = HistoryLog::new();
        history.reset(&state);
        Ok(Self { state, history })
    }

    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn is_won(&self) -> bool {
        self.state.check_win()
    }

    /// Applies one move command. Accepted moves are recorded in history;
    /// rejected moves change nothing and leave no history entry.
    pub fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        let outcome = self.state.try_move(direction);
        if outcome.changed_state() {
            self.history.record(&self.state);
        }
        outcome
    }

    /// Swaps the live state for the previous snapshot. Returns `false` when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(prior) => {
                self.state = prior.clone();
                true
            }
            None => false,
        }
    }

    /// Swaps the live state for the next snapshot. Returns `false` when
    /// already at the newest entry.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(next) => {
                self.state = next.clone();
                true
            }
            None => false,
        }
    }

    /// Reloads the level from scratch and reseeds the history. On a parse
    /// failure the current state and history are kept.
    pub fn reset(&mut self, level_text: &str) -> Result<(), LevelError> {
        let state = parse_level(level_text)?;
        self.state = state;
        self.history.reset(&self.state);
        Ok(())
    }

    /// Serializes the live state together with its history.
    pub fn save_snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        snapshot::encode(&self.state, Some(&self.history))
    }

    /// Restores a previously saved snapshot. Best-effort: when the bytes do
    /// not restore, the current state and history are kept untouched. A
    /// snapshot without history reseeds the log with the restored state.
    pub fn load_snapshot(&mut self, bytes: &[u8]) -> Result<(), SnapshotError> {
        match snapshot::decode(bytes) {
            Ok((state, history)) => {
                self.state = state;
                self.history = history.unwrap_or_else(|| {
                    let mut seeded = HistoryLog::new();
                    seeded.reset(&self.state);
                    seeded
                });
                Ok(())
            }
            Err(err) => {
                debug!(error = %err, "snapshot rejected, keeping current state");
                Err(err)
            }
        }
    }
}

/// Cross-session aggregates, owned by whoever hosts the sessions and passed
/// by reference. Replaces process-wide counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: u64,
    pub total_steps: u64,
}

impl Statistics {
    /// Call once per level start or reset.
    pub fn record_reset(&mut self) {
        self.games_played += 1;
    }

    /// Call with every move outcome; only accepted moves count as steps.
    pub fn record_outcome(&mut self, outcome: MoveOutcome) {
        if outcome.changed_state() {
            self.total_steps += 1;
        }
    }

    pub fn average_steps(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_steps as f64 / self.games_played as f64
        }
    }
}
