use std::collections::BTreeSet;

use tracing::info;

use crate::core::{Cell, Direction, Grid, Pos, PuzzleState};
use crate::error::LevelError;

/// Parses a textual level description into the initial puzzle state.
///
/// Tiles: `#` wall, `@` player, `$` box, `.` goal, `*` box on goal, `+`
/// player on goal, space floor. Any other character is read as floor.
/// Leading and trailing blank lines are trimmed so levels can be written as
/// raw string literals; a blank line inside the level is malformed. Ragged
/// rows are padded to the widest row with floor.
pub fn parse_level(text: &str) -> Result<PuzzleState, LevelError> {
    let text = text.trim_matches('\n');
    if text.is_empty() {
        return Err(LevelError::NoPlayer);
    }

    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut player: Option<Pos> = None;
    let mut goals: BTreeSet<Pos> = BTreeSet::new();

    for (y, line) in text.lines().enumerate() {
        if line.is_empty() {
            return Err(LevelError::EmptyRow { row: y });
        }
        let mut row = Vec::with_capacity(line.len());
        for (x, ch) in line.chars().enumerate() {
            let pos = Pos::new(x as i32, y as i32);
            let cell = match ch {
                '#' => Cell::Wall,
                '$' => Cell::Box,
                '.' => Cell::Goal,
                '*' => Cell::BoxOnGoal,
                '@' => Cell::PlayerOnFloor,
                '+' => Cell::PlayerOnGoal,
                _ => Cell::Empty,
            };
            if cell.is_player() {
                if let Some(first) = player {
                    return Err(LevelError::MultiplePlayers { first, second: pos });
                }
                player = Some(pos);
            }
            if matches!(cell, Cell::Goal | Cell::BoxOnGoal | Cell::PlayerOnGoal) {
                goals.insert(pos);
            }
            row.push(cell);
        }
        rows.push(row);
    }

    let player_pos = player.ok_or(LevelError::NoPlayer)?;
    let grid = Grid::from_ragged_rows(rows, Cell::Empty);
    info!(
        width = grid.width(),
        height = grid.height(),
        goals = goals.len(),
        "level loaded"
    );
    Ok(PuzzleState::new(
        grid,
        player_pos,
        Direction::Down,
        0,
        goals,
        BTreeSet::from([player_pos]),
    ))
}
