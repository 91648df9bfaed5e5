// Sokoban core engine: authoritative grid state, the move/push transition
// rule, bounded undo/redo history, level parsing, and a versioned snapshot
// codec. Rendering, input handling, and storage live with the embedding
// application; this crate only consumes level text and snapshot bytes.
//
// Tiles: '#' wall, '@' player, '$' box, '.' goal, '*' box on goal,
// '+' player on goal, ' ' floor.

pub mod core;
mod error;
mod level;
mod session;
mod snapshot;

#[cfg(test)]
mod test;

pub use crate::core::{
    Cell, Direction, Grid, HistoryLog, MoveOutcome, Pos, PuzzleState, RejectReason,
};
pub use error::{GridError, LevelError, SnapshotError};
pub use level::parse_level;
pub use session::{Session, Statistics};
pub use snapshot::{decode, encode};
