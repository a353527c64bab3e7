//! Engine tests - cascades, swaps, and configuration through the facade

use std::collections::HashSet;

use match3::core::{Board, Game, Item};
use match3::engine::{
    find_hint, has_moves, play_swap, resolve_cascade, settle, try_swap, EngineError, GameConfig,
    SwapError,
};
use match3::types::{Gravity, Position, Size, Type, COMBO_BASE, POINTS_PER_ITEM};

/// Build a game from rows given top first. `.` is empty.
fn game_from(rows: &[&str]) -> Game {
    let height = rows.len();
    let width = rows.first().map(|r| r.len()).unwrap_or(0);
    let mut game = Game::new(Size::new(width, height));
    for (row, line) in rows.iter().enumerate() {
        let y = (height - 1 - row) as i32;
        for (x, ch) in line.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let kind = Type::new(ch.to_string());
            game.add_types([kind.clone()]);
            game.board()
                .add_item(Item::new(kind, Position::new(x as i32, y)))
                .unwrap();
        }
    }
    game
}

fn assert_one_item_per_position(board: &Board) {
    let mut seen = HashSet::new();
    for item in board.items() {
        let pos = item.position().get();
        assert!(board.contains(pos), "item outside board at {pos}");
        assert!(seen.insert(pos), "two items at {pos}");
    }
}

#[test]
fn test_settle_reaches_fixed_point() {
    let game = game_from(&["a.b", "...", ".c.", "..."]);
    let report = settle(game.board()).unwrap();
    assert_eq!(report.passes, 3);
    assert_eq!(report.moved.len(), 3);
    assert!(game.board().iterate().unwrap().is_empty());
    for x in 0..3 {
        assert!(game.board().is_occupied(Position::new(x, 0)));
    }
}

#[test]
fn test_settle_unsupported_gravity() {
    let game = game_from(&["a", "."]);
    game.board().set_gravity(Gravity::Left);
    assert!(settle(game.board()).is_err());
}

#[test]
fn test_cascade_combo_scoring() {
    let mut game = game_from(&["c..", "a..", "a..", "acc"]);
    let report = resolve_cascade(&mut game, 16).unwrap();

    assert_eq!(report.rounds.len(), 2);
    let expected = 3 * POINTS_PER_ITEM + (3 * POINTS_PER_ITEM + COMBO_BASE);
    assert_eq!(report.total, expected);
    assert_eq!(game.score(), expected);
    assert_eq!(game.board().item_count(), 0);
}

#[test]
fn test_cascade_on_quiet_board_is_empty() {
    let mut game = game_from(&["ab", "ba"]);
    let report = resolve_cascade(&mut game, 16).unwrap();
    assert!(report.rounds.is_empty());
    assert_eq!(report.total, 0);
    assert!(!report.truncated);
}

#[test]
fn test_cascade_propagates_gravity_error() {
    let mut game = game_from(&["a", "a", "a"]);
    game.board().set_gravity(Gravity::Up);
    let err = resolve_cascade(&mut game, 4).unwrap_err();
    assert_eq!(err.code(), "unsupported_gravity");
    assert!(matches!(err, EngineError::Board(_)));
}

#[test]
fn test_swap_error_codes() {
    assert_eq!(SwapError::OutOfBounds.code(), "out_of_bounds");
    assert_eq!(SwapError::NotAdjacent.code(), "not_adjacent");
    assert_eq!(SwapError::EmptyCell.code(), "empty_cell");
    assert_eq!(SwapError::NoMatch.code(), "no_match");
    assert_eq!(EngineError::from(SwapError::NoMatch).code(), "no_match");
}

#[test]
fn test_rejected_play_keeps_score_and_board() {
    let mut game = game_from(&["ab", "ba"]);
    game.award(7);
    let before = game.board().snapshot();

    let err = play_swap(&mut game, Position::new(0, 0), Position::new(1, 0), 4).unwrap_err();
    assert_eq!(err, EngineError::Swap(SwapError::NoMatch));
    assert_eq!(game.score(), 7);
    assert_eq!(game.board().snapshot(), before);
}

#[test]
fn test_hint_is_a_legal_swap() {
    let game = game_from(&["b..", "aab", "bba"]);
    let (a, b) = find_hint(game.board()).unwrap();
    assert!(a.is_adjacent(b));
    try_swap(game.board(), a, b).unwrap();
    assert!(game.board().has_match());
}

#[test]
fn test_empty_board_has_no_moves() {
    let game = Game::new(Size::new(4, 4));
    assert!(!has_moves(game.board()));
    assert_eq!(find_hint(game.board()), None);
}

#[test]
fn test_seeded_playthrough_keeps_invariants() {
    let config = GameConfig {
        size: Size::new(6, 6),
        seed: Some(2024),
        ..GameConfig::default()
    };
    let mut game = config.build().unwrap();
    assert_eq!(game.board().item_count(), 36);

    let mut expected = resolve_cascade(&mut game, config.max_cascades).unwrap().total;
    assert_one_item_per_position(game.board());

    let mut turns = 0;
    while let Some((a, b)) = find_hint(game.board()) {
        let report = play_swap(&mut game, a, b, config.max_cascades).unwrap();
        assert!(!report.rounds.is_empty());
        expected += report.total;
        assert_one_item_per_position(game.board());
        assert!(game.board().iterate().unwrap().is_empty() || report.truncated);
        turns += 1;
        assert!(turns <= 36, "each turn removes at least three items");
    }
    assert_eq!(game.score(), expected);
    assert!(!has_moves(game.board()));
}

#[test]
fn test_config_build_is_deterministic_with_seed() {
    let config = GameConfig {
        size: Size::new(5, 5),
        types: vec!["x".into(), "y".into(), "z".into()],
        seed: Some(11),
        ..GameConfig::default()
    };
    let first = config.build().unwrap().board().snapshot();
    let second = config.build().unwrap().board().snapshot();
    assert_eq!(first, second);
    assert!(first
        .tiles
        .iter()
        .flatten()
        .all(|name| ["x", "y", "z"].contains(&name.as_str())));
}
