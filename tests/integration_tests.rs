//! Integration tests for whole sessions driven through the public API

use twin_tetris::core::{
    drop_score, fall_interval_ms, level_for_lines, line_clear_score, Board, GameState,
};
use twin_tetris::types::{GameAction, PieceKind, Variant, BOARD_WIDTH};

/// Hard-drop every piece where it spawns until the stack tops out.
fn stack_until_top_out(variant: Variant, seed: u64) -> (GameState, u32) {
    let mut state = GameState::new(variant, seed);
    let mut pieces = 0;
    for _ in 0..200 {
        if state.game_over() {
            break;
        }
        state.apply_action(GameAction::HardDrop);
        if state.take_last_event().is_some() {
            pieces += 1;
        }
    }
    (state, pieces)
}

#[test]
fn test_center_stacking_tops_out() {
    for variant in [Variant::Simple, Variant::Extended] {
        for seed in [1, 2, 3, 99] {
            let (state, pieces) = stack_until_top_out(variant, seed);
            assert!(state.game_over(), "{variant:?}/{seed} never topped out");
            // Center stacking never fills a row, so every locked cell stays.
            assert_eq!(state.board().len(), pieces as usize * 4);
            assert_eq!(state.lines(), 0);
        }
    }
}

#[test]
fn test_game_over_is_terminal() {
    let (mut state, _) = stack_until_top_out(Variant::Extended, 7);
    let before = state.snapshot();

    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.apply_action(GameAction::HardDrop));
    assert!(!state.apply_action(GameAction::Hold));
    assert!(!state.tick(10_000));
    assert_eq!(state.snapshot(), before);
    assert!(before.game_over);
}

#[test]
fn test_blocked_spawn_ends_session_immediately() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 0, PieceKind::Z);
    }
    let state = GameState::with_board(Variant::Simple, 3, board);
    assert!(state.game_over());
}

#[test]
fn test_gravity_lands_and_locks_a_piece() {
    let mut state = GameState::new(Variant::Simple, 42);
    let first = state.active().kind;

    // 500ms per row at level 1; enough ticks to fall the whole board and lock.
    let mut locked = None;
    for _ in 0..25 {
        state.tick(500);
        if let Some(event) = state.take_last_event() {
            locked = Some(event);
            break;
        }
    }

    let event = locked.expect("piece should lock under gravity");
    assert_eq!(event.kind, first);
    assert_eq!(event.cells_added, 4);
    assert_eq!(state.board().len(), 4);
    assert_eq!(state.score(), 0);
}

#[test]
fn test_gravity_waits_for_the_full_interval() {
    let mut state = GameState::new(Variant::Extended, 42);
    let y = state.active().y;
    assert!(!state.tick(499));
    assert_eq!(state.active().y, y);
    assert!(state.tick(1));
    assert_eq!(state.active().y, y + 1);
}

#[test]
fn test_extended_drops_score_and_simple_does_not() {
    let mut extended = GameState::new(Variant::Extended, 8);
    assert!(extended.apply_action(GameAction::SoftDrop));
    assert_eq!(extended.score(), 1);

    let distance = extended.ghost().y - extended.active().y;
    extended.apply_action(GameAction::HardDrop);
    assert_eq!(extended.score(), 1 + 2 * distance as u32);

    let mut simple = GameState::new(Variant::Simple, 8);
    simple.apply_action(GameAction::SoftDrop);
    simple.apply_action(GameAction::HardDrop);
    assert_eq!(simple.score(), 0);
}

#[test]
fn test_hold_once_per_piece() {
    let mut state = GameState::new(Variant::Extended, 21);
    let first = state.active().kind;
    let next = state.next_queue()[0];

    assert!(state.apply_action(GameAction::Hold));
    assert_eq!(state.hold_piece().map(|p| p.kind), Some(first));
    assert_eq!(state.active().kind, next);
    assert!(!state.apply_action(GameAction::Hold));

    state.apply_action(GameAction::HardDrop);
    assert!(!state.hold_used());
    let incoming = state.active().kind;
    assert!(state.apply_action(GameAction::Hold));
    assert_eq!(state.active().kind, first);
    assert_eq!(state.hold_piece().map(|p| p.kind), Some(incoming));
}

#[test]
fn test_simple_variant_ignores_hold() {
    let mut state = GameState::new(Variant::Simple, 21);
    let active = state.active();
    assert!(!state.apply_action(GameAction::Hold));
    assert_eq!(state.active(), active);
    assert!(state.hold_piece().is_none());
}

#[test]
fn test_scoring_tables() {
    assert_eq!(
        [1, 2, 3, 4].map(|n| line_clear_score(n, 1)),
        [100, 300, 500, 800]
    );
    assert_eq!(
        [1, 2, 3, 4].map(|n| line_clear_score(n, 2)),
        [200, 600, 1000, 1600]
    );
    assert_eq!(line_clear_score(0, 3), 0);
    assert_eq!(drop_score(5, false), 5);
    assert_eq!(drop_score(5, true), 10);
}

#[test]
fn test_levels_and_fall_speed() {
    assert_eq!(level_for_lines(0), 1);
    assert_eq!(level_for_lines(9), 1);
    assert_eq!(level_for_lines(10), 2);
    assert_eq!(level_for_lines(35), 4);

    assert_eq!(fall_interval_ms(1), 500);
    assert_eq!(fall_interval_ms(2), 450);
    assert_eq!(fall_interval_ms(9), 100);
    assert_eq!(fall_interval_ms(10), 50);
    assert_eq!(fall_interval_ms(30), 50);
}
