mod grid;
mod history;
mod models;
mod update;

pub use grid::Grid;
pub use history::HistoryLog;
pub use models::{Cell, Direction, MoveOutcome, Pos, PuzzleState, RejectReason};
