//! Scripted games and determinism tests.

use std::thread;

use connect_five::core::{Board, GameConfig, GameState, PlayerId, Winner};
use connect_five::games::ConnectFive;
use connect_five::rules::RulesEngine;
use connect_five::Action;

fn board(diagram: &str) -> Board {
    diagram.parse().unwrap()
}

/// Where the piece lands if no rotation follows.
fn dropped(state: &GameState, action: Action) -> Board {
    let mut b = state.board;
    let col = action.column();
    b.set(b.landing_row(col), col, state.color.color());
    b
}

// =============================================================================
// Centre Column Scenario
// =============================================================================

#[test]
fn test_seven_plies_in_centre_column() {
    let game = ConnectFive::new();
    let mut state = game.init();
    let mut rotated_after = Vec::new();

    for _ in 0..7 {
        let plain = dropped(&state, Action(4));
        state = game.step(&state, Action(4));
        if state.board != plain {
            rotated_after.push(state.round);
        }
    }

    assert_eq!(rotated_after, vec![3, 6]);
    assert_eq!(state.round, 7);
    assert_eq!(state.color, PlayerId::SECOND);
    assert_eq!(state.winner, Winner::None);
    assert_eq!(
        state.board,
        board(
            "
            .........
            .........
            .........
            .........
            .........
            X........
            O........
            X........
            OXO.X....
            "
        )
    );
}

#[test]
fn test_centre_column_intermediate_boards() {
    let game = ConnectFive::new();
    let mut state = game.init();

    for _ in 0..3 {
        state = game.step(&state, Action(4));
    }
    // X, O, X stacked in column 4 turn into the bottom row.
    assert_eq!(state.board.to_string().lines().last(), Some("XOX......"));
    assert_eq!(state.board.piece_count(), 3);

    for _ in 0..3 {
        state = game.step(&state, Action(4));
    }
    assert_eq!(state.round, 6);
    assert_eq!(state.board.column_count(0), 4);
    assert_eq!(state.board.piece_count(), 6);
    assert!(state.board.is_settled());
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_longer_rotation_period() {
    let game = ConnectFive::with_config(GameConfig::default().with_rotation_period(4)).unwrap();
    let mut state = game.init();

    for _ in 0..3 {
        state = game.step(&state, Action(4));
    }
    assert_eq!(state.board.column_count(4), 3);

    state = game.step(&state, Action(4));
    assert_eq!(state.board.column_count(4), 0);
    assert_eq!(state.board.piece_count(), 4);
}

// =============================================================================
// Determinism
// =============================================================================

fn play(game: &ConnectFive, moves: &[u8]) -> Vec<GameState> {
    let mut state = game.init();
    let mut history = vec![state];
    for &m in moves {
        if game.is_terminal(&state) {
            break;
        }
        let legal = game.legal_actions(&state);
        let action = legal[m as usize % legal.len()];
        state = game.step(&state, action);
        history.push(state);
    }
    history
}

#[test]
fn test_deterministic_replay() {
    let game = ConnectFive::new();
    let moves: Vec<u8> = (0..60u32).map(|i| ((i * 7 + 3) % 11) as u8).collect();

    let first = play(&game, &moves);
    let second = play(&game, &moves);

    assert_eq!(first, second);
}

#[test]
fn test_parallel_games_match_sequential() {
    let game = ConnectFive::new();
    let scripts: Vec<Vec<u8>> = (0..8u8)
        .map(|seed| (0..50u8).map(|i| i.wrapping_mul(seed + 3) % 9).collect())
        .collect();

    let sequential: Vec<_> = scripts.iter().map(|s| play(&game, s)).collect();

    let parallel: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = scripts
            .iter()
            .map(|s| {
                let game = &game;
                scope.spawn(move || play(game, s))
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn test_step_leaves_input_untouched() {
    let game = ConnectFive::new();
    let state = game.step(&game.init(), Action(1));
    let snapshot = state;

    let _ = game.step(&state, Action(1));
    let _ = game.rotate_update(&state);

    assert_eq!(state, snapshot);
}
