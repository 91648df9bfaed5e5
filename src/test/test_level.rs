use crate::core::{Cell, Direction, Pos};
use crate::error::LevelError;
use crate::level::parse_level;

#[test]
fn parses_the_classic_tiles() {
    let level = r#"
#####
#@$.#
#####
"#;
    let state = parse_level(level).expect("level parses");

    assert_eq!(state.grid().width(), 5);
    assert_eq!(state.grid().height(), 3);
    assert_eq!(state.player_pos(), Pos::new(1, 1));
    assert_eq!(state.grid().get(Pos::new(2, 1)), Ok(Cell::Box));
    assert_eq!(state.grid().get(Pos::new(3, 1)), Ok(Cell::Goal));
    assert_eq!(state.facing(), Direction::Down);
    assert_eq!(state.step_count(), 0);
    assert!(state.goal_positions().contains(&Pos::new(3, 1)));
    assert_eq!(state.goal_positions().len(), 1);
}

#[test]
fn box_on_goal_and_player_on_goal_both_count_as_goals() {
    let level = r#"
#####
#+*.#
#####
"#;
    let state = parse_level(level).expect("level parses");

    assert_eq!(state.grid().get(Pos::new(1, 1)), Ok(Cell::PlayerOnGoal));
    assert_eq!(state.grid().get(Pos::new(2, 1)), Ok(Cell::BoxOnGoal));
    assert_eq!(state.goal_positions().len(), 3);
    assert_eq!(state.player_pos(), Pos::new(1, 1));
}

#[test]
fn ragged_rows_are_padded_with_floor() {
    let level = r#"
####
#@
####
"#;
    let state = parse_level(level).expect("level parses");

    assert_eq!(state.grid().width(), 4);
    assert_eq!(state.grid().get(Pos::new(2, 1)), Ok(Cell::Empty));
    assert_eq!(state.grid().get(Pos::new(3, 1)), Ok(Cell::Empty));
}

#[test]
fn unknown_characters_read_as_floor() {
    let level = r#"
#@x#
"#;
    let state = parse_level(level).expect("level parses");
    assert_eq!(state.grid().get(Pos::new(2, 0)), Ok(Cell::Empty));
}

#[test]
fn level_without_a_player_is_malformed() {
    let level = r#"
####
# $#
####
"#;
    assert_eq!(parse_level(level), Err(LevelError::NoPlayer));
}

#[test]
fn level_with_two_players_is_malformed() {
    let level = r#"
#####
#@ @#
#####
"#;
    assert_eq!(
        parse_level(level),
        Err(LevelError::MultiplePlayers {
            first: Pos::new(1, 1),
            second: Pos::new(3, 1),
        })
    );
}

#[test]
fn interior_blank_row_is_malformed() {
    let level = "####\n\n#@ #";
    assert_eq!(parse_level(level), Err(LevelError::EmptyRow { row: 1 }));
}

#[test]
fn empty_text_is_malformed() {
    assert_eq!(parse_level(""), Err(LevelError::NoPlayer));
    assert_eq!(parse_level("\n\n"), Err(LevelError::NoPlayer));
}

#[test]
fn render_round_trips_the_level_text() {
    let level = r#"
#####
#@$.#
## *#
#####
"#;
    let state = parse_level(level).expect("level parses");
    assert_eq!(state.render().trim_matches('\n'), level.trim_matches('\n'));
}

#[test]
fn out_of_bounds_access_fails_loudly() {
    let level = r#"
#@#
"#;
    let state = parse_level(level).expect("level parses");
    assert!(state.grid().get(Pos::new(3, 0)).is_err());
    assert!(state.grid().get(Pos::new(0, -1)).is_err());
    assert!(state.grid().get(Pos::new(0, 0)).is_ok());
}
