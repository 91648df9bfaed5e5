use std::collections::BTreeSet;

use tracing::debug;

use crate::core::models::{Cell, Direction, MoveOutcome, Pos, PuzzleState, RejectReason};

impl PuzzleState {
    /// Attempts to move the player one cell in `direction`, pushing a box
    /// if one occupies the target cell.
    ///
    /// Rejected moves leave the state untouched: grid, player position,
    /// facing, and step count all keep their prior values. Callers record a
    /// history entry only for `Moved`/`MovedPushingBox` outcomes.
    pub fn try_move(&mut self, direction: Direction) -> MoveOutcome {
        let target = self.player_pos.step(direction);
        let Ok(dest) = self.grid.get(target) else {
            debug!(?direction, "move rejected: target out of bounds");
            return MoveOutcome::Rejected(RejectReason::Blocked);
        };

        let pushing = match dest {
            Cell::Wall => {
                debug!(?direction, "move rejected: wall");
                return MoveOutcome::Rejected(RejectReason::Blocked);
            }
            Cell::Box | Cell::BoxOnGoal => {
                let beyond = target.step(direction);
                match self.grid.get(beyond) {
                    Ok(cell) if cell.is_walkable() => {}
                    _ => {
                        // Pushing into a wall, another box, or off the grid.
                        debug!(?direction, "move rejected: box cannot advance");
                        return MoveOutcome::Rejected(RejectReason::BoxBlocked);
                    }
                }
                self.grid[beyond] = self.occupied_cell(beyond, Cell::Box, Cell::BoxOnGoal);
                true
            }
            Cell::Empty | Cell::Goal => false,
            // A second player cell cannot exist; treat it as solid if the
            // invariant is ever violated upstream.
            Cell::PlayerOnFloor | Cell::PlayerOnGoal => {
                return MoveOutcome::Rejected(RejectReason::Blocked);
            }
        };

        self.grid[self.player_pos] = self.vacated_cell(self.player_pos);
        self.grid[target] = self.occupied_cell(target, Cell::PlayerOnFloor, Cell::PlayerOnGoal);
        self.player_pos = target;
        self.facing = direction;
        self.step_count += 1;
        self.visited.insert(target);

        if pushing {
            MoveOutcome::MovedPushingBox
        } else {
            MoveOutcome::Moved
        }
    }

    /// True iff the set of box positions equals the set of goal positions.
    /// A box parked off-goal keeps the puzzle unsolved even when every goal
    /// is covered. Side-effect free.
    pub fn check_win(&self) -> bool {
        let boxes: BTreeSet<Pos> = self
            .grid
            .iter()
            .filter(|&(_, cell)| cell.is_box())
            .map(|(pos, _)| pos)
            .collect();
        boxes == self.goal_positions
    }

    /// What a cell reverts to when the player or a box leaves it.
    fn vacated_cell(&self, pos: Pos) -> Cell {
        if self.is_goal(pos) {
            Cell::Goal
        } else {
            Cell::Empty
        }
    }

    /// Picks the plain or on-goal variant for an occupant entering `pos`.
    fn occupied_cell(&self, pos: Pos, plain: Cell, on_goal: Cell) -> Cell {
        if self.is_goal(pos) { on_goal } else { plain }
    }
}
