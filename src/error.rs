use thiserror::Error;

use crate::core::Pos;

/// Out-of-range grid access. A programmer error on the caller's side;
/// surfaced loudly rather than clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("position ({}, {}) outside the {}x{} grid", .pos.x, .pos.y, .width, .height)]
    OutOfBounds { pos: Pos, width: i32, height: i32 },
}

/// The level text cannot produce a playable puzzle. Fatal to loading that
/// level only; callers fall back or report, the process keeps running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level has no player marker")]
    NoPlayer,
    #[error(
        "level has more than one player marker: ({}, {}) and ({}, {})",
        .first.x, .first.y, .second.x, .second.y
    )]
    MultiplePlayers { first: Pos, second: Pos },
    #[error("row {row} of the level is empty")]
    EmptyRow { row: usize },
}

/// The snapshot bytes cannot be restored. Callers keep their current state
/// and ignore the load attempt.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot bytes are not a valid payload: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
    #[error("snapshot cell data does not match its {width}x{height} dimensions")]
    DimensionMismatch { width: i32, height: i32 },
    #[error("snapshot player position ({}, {}) does not address a player cell", .pos.x, .pos.y)]
    PlayerMismatch { pos: Pos },
    #[error("snapshot goal position ({}, {}) lies outside the grid", .pos.x, .pos.y)]
    GoalOutOfBounds { pos: Pos },
    #[error("snapshot history cursor is out of range")]
    HistoryCursorOutOfRange,
}
