use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::Grid;

/// One grid position's content. The on-goal variants carry explicitly what
/// the classic character encoding leaves implicit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
    Goal,
    Box,
    BoxOnGoal,
    PlayerOnFloor,
    PlayerOnGoal,
}

impl Cell {
    /// The classic Sokoban tile character for this cell.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::Goal => '.',
            Cell::Box => '$',
            Cell::BoxOnGoal => '*',
            Cell::PlayerOnFloor => '@',
            Cell::PlayerOnGoal => '+',
        }
    }

    pub fn is_box(self) -> bool {
        matches!(self, Cell::Box | Cell::BoxOnGoal)
    }

    pub fn is_player(self) -> bool {
        matches!(self, Cell::PlayerOnFloor | Cell::PlayerOnGoal)
    }

    pub fn is_walkable(self) -> bool {
        matches!(self, Cell::Empty | Cell::Goal)
    }
}

/// Grid coordinate. Signed so direction arithmetic can run before the
/// bounds check.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighboring position one step in `direction`. May be out of
    /// bounds; callers check against the grid.
    pub fn step(self, direction: Direction) -> Pos {
        let (dx, dy) = direction.delta();
        Pos {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (dx, dy) with y growing downward, matching row order in level text.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Why a move attempt was refused. These are expected, frequent outcomes,
/// not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// The target cell is a wall or off the grid.
    Blocked,
    /// The target cell holds a box that cannot advance: the cell beyond it
    /// is a wall, another box, or off the grid.
    BoxBlocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    Moved,
    MovedPushingBox,
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// True for the outcomes that mutated the puzzle and should be recorded
    /// in history.
    pub fn changed_state(self) -> bool {
        matches!(self, MoveOutcome::Moved | MoveOutcome::MovedPushingBox)
    }
}

/// The authoritative state of one puzzle: the grid plus the player's
/// position, facing, and step counter.
///
/// `goal_positions` is computed once at load and never mutated afterwards;
/// only cell occupancy (box-on-goal, player-on-goal) changes during play.
/// `visited` accumulates every position the player has stood on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    pub(crate) grid: Grid,
    pub(crate) player_pos: Pos,
    pub(crate) facing: Direction,
    pub(crate) step_count: u32,
    pub(crate) goal_positions: BTreeSet<Pos>,
    // Absent in older snapshot payloads.
    #[serde(default)]
    pub(crate) visited: BTreeSet<Pos>,
}

impl PuzzleState {
    pub(crate) fn new(
        grid: Grid,
        player_pos: Pos,
        facing: Direction,
        step_count: u32,
        goal_positions: BTreeSet<Pos>,
        visited: BTreeSet<Pos>,
    ) -> Self {
        Self {
            grid,
            player_pos,
            facing,
            step_count,
            goal_positions,
            visited,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn goal_positions(&self) -> &BTreeSet<Pos> {
        &self.goal_positions
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.goal_positions.contains(&pos)
    }

    /// Every position the player has occupied since the level started.
    pub fn visited_positions(&self) -> &BTreeSet<Pos> {
        &self.visited
    }

    /// Textual tile view, one row per line, using the classic glyphs.
    pub fn render(&self) -> String {
        self.grid.to_text()
    }
}
