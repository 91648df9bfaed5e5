use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Direction, Grid, HistoryLog, Pos, PuzzleState};
use crate::error::SnapshotError;

/// Current snapshot schema version. Bump when the payload shape changes.
const SNAPSHOT_VERSION: u32 = 1;

/// The durable whole-state payload. Serializes only the defined puzzle
/// fields; history is optional so older or trimmed saves still restore.
#[derive(Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    player: Pos,
    facing: Direction,
    steps: u32,
    goals: Vec<Pos>,
    #[serde(default)]
    visited: Vec<Pos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    history: Option<HistoryLog>,
}

/// Serializes the puzzle state, and optionally its history, to bytes.
pub fn encode(
    state: &PuzzleState,
    history: Option<&HistoryLog>,
) -> Result<Vec<u8>, SnapshotError> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        width: state.grid().width(),
        height: state.grid().height(),
        cells: state.grid().cells().to_vec(),
        player: state.player_pos(),
        facing: state.facing(),
        steps: state.step_count(),
        goals: state.goal_positions().iter().copied().collect(),
        visited: state.visited_positions().iter().copied().collect(),
        history: history.cloned(),
    };
    Ok(serde_json::to_vec(&snapshot)?)
}

/// Restores a puzzle state (and its history, when present) from bytes
/// produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<(PuzzleState, Option<HistoryLog>), SnapshotError> {
    let snapshot: Snapshot = serde_json::from_slice(bytes)?;
    if snapshot.version != SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(snapshot.version));
    }

    let grid = Grid::from_cells(snapshot.width, snapshot.height, snapshot.cells).ok_or(
        SnapshotError::DimensionMismatch {
            width: snapshot.width,
            height: snapshot.height,
        },
    )?;
    let goals: BTreeSet<Pos> = snapshot.goals.into_iter().collect();
    // Older payloads carry no visited set; the player has at least stood
    // where they stand now.
    let mut visited: BTreeSet<Pos> = snapshot.visited.into_iter().collect();
    visited.insert(snapshot.player);
    let state = PuzzleState::new(
        grid,
        snapshot.player,
        snapshot.facing,
        snapshot.steps,
        goals,
        visited,
    );
    validate_state(&state)?;

    if let Some(history) = &snapshot.history {
        if !history.is_consistent() {
            return Err(SnapshotError::HistoryCursorOutOfRange);
        }
        for entry in history.entries() {
            validate_state(entry)?;
        }
    }

    Ok((state, snapshot.history))
}

/// Structural invariants that must hold for a restored state: exactly one
/// player cell, addressed by the recorded position, and every goal
/// position inside the grid.
fn validate_state(state: &PuzzleState) -> Result<(), SnapshotError> {
    let grid = state.grid();
    let player = state.player_pos();
    if grid.cells().len() != (grid.width().max(0) as usize) * (grid.height().max(0) as usize) {
        return Err(SnapshotError::DimensionMismatch {
            width: grid.width(),
            height: grid.height(),
        });
    }
    let player_cells = grid.iter().filter(|&(_, cell)| cell.is_player()).count();
    let addressed = grid.get(player).is_ok_and(|cell| cell.is_player());
    if player_cells != 1 || !addressed {
        return Err(SnapshotError::PlayerMismatch { pos: player });
    }
    for &pos in state.goal_positions() {
        if !grid.contains(pos) {
            return Err(SnapshotError::GoalOutOfBounds { pos });
        }
    }
    Ok(())
}
