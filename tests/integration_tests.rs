//! Integration tests for the goban rules engine.
//!
//! Each test drives the engine through real alternating move sequences,
//! the way a session coordinator would, and checks the observable contract:
//! captures, rejections, and full state restoration on every rejection.

use goban::board::{Point, Stone};
use goban::engine::{BoardEngine, InvalidSize, MoveError};

/// Play a sequence of moves, alternating from Black, failing the test if
/// any of them is rejected.
fn setup(size: usize, moves: &[Point]) -> BoardEngine {
    let mut game = BoardEngine::new(size, Stone::Black).unwrap();
    for &p in moves {
        game.play(p)
            .unwrap_or_else(|e| panic!("setup move at {p:?} rejected: {e}"));
    }
    game
}

// =============================================================================
// Captures
// =============================================================================

#[test]
fn capturing_removes_the_whole_group_and_counts_it() {
    // Black surrounds the two-stone white group at (1,1)-(2,1); the white
    // moves on the right edge keep the sequence alternating.
    let mut game = setup(
        5,
        &[
            (1, 0),
            (1, 1),
            (2, 0),
            (2, 1),
            (0, 1),
            (4, 4),
            (3, 1),
            (4, 3),
            (1, 2),
            (4, 2),
        ],
    );

    let outcome = game.play((2, 2)).unwrap();
    assert_eq!(outcome.color, Stone::Black);
    assert_eq!(outcome.captured.len(), 2);
    assert!(outcome.captured.contains(&(1, 1)));
    assert!(outcome.captured.contains(&(2, 1)));
    assert_eq!(outcome.removed.white, 2);
    assert_eq!(outcome.removed.black, 0);
    assert_eq!(game.caught().white, 2);
    assert_eq!(game.caught().black, 0);

    // The captured intersections are empty again.
    assert_eq!(game.board().get((1, 1)), Some(Stone::Empty));
    assert_eq!(game.board().get((2, 1)), Some(Stone::Empty));
    // The capturing stone stays.
    assert_eq!(game.board().get((2, 2)), Some(Stone::Black));
}

#[test]
fn capture_overrides_apparent_suicide() {
    // Black plays into the corner at (0,0) where both neighbors are white:
    // zero liberties before captures resolve, but the move takes white's
    // (1,0) stone and gains its point as a liberty.
    let mut game = setup(5, &[(2, 0), (1, 0), (1, 1), (0, 1)]);

    let outcome = game.play((0, 0)).unwrap();
    assert_eq!(outcome.captured, vec![(1, 0)]);
    assert_eq!(game.caught().white, 1);
    assert_eq!(game.board().get((0, 0)), Some(Stone::Black));
    assert_eq!(game.board().get((1, 0)), Some(Stone::Empty));
    // The other white stone keeps its outside liberty and survives.
    assert_eq!(game.board().get((0, 1)), Some(Stone::White));
}

// =============================================================================
// Suicide
// =============================================================================

#[test]
fn suicide_is_rejected_and_state_fully_restored() {
    // Black holds (1,0) and (0,1); white at (0,0) would have no liberties
    // and captures nothing.
    let mut game = setup(5, &[(1, 0), (4, 4), (0, 1)]);
    assert_eq!(game.turn(), Stone::White);

    let before = game.clone();
    assert_eq!(game.play((0, 0)), Err(MoveError::Suicide));
    assert_eq!(game, before);
    assert_eq!(game.board().get((0, 0)), Some(Stone::Empty));
    assert_eq!(game.turn(), Stone::White);
}

#[test]
fn multi_point_suicide_is_rejected() {
    // White already has a stone at (1,0); filling (0,0) would join it into
    // a two-stone group with no liberties.
    let mut game = setup(
        5,
        &[(2, 0), (1, 0), (1, 1), (4, 4), (0, 1)],
    );
    assert_eq!(game.turn(), Stone::White);

    let before = game.clone();
    assert_eq!(game.play((0, 0)), Err(MoveError::Suicide));
    assert_eq!(game, before);
}

// =============================================================================
// Ko
// =============================================================================

/// The standard four-stone ko shape: black takes first, white's immediate
/// recapture would repeat the position from two plies earlier.
fn ko_position() -> BoardEngine {
    setup(
        5,
        &[
            (1, 0), // B
            (2, 0), // W
            (0, 1), // B
            (3, 1), // W
            (1, 2), // B
            (2, 2), // W
            (4, 4), // B elsewhere
            (1, 1), // W plays into the ko mouth
        ],
    )
}

#[test]
fn immediate_ko_recapture_is_rejected() {
    let mut game = ko_position();

    // Black takes the ko.
    let outcome = game.play((2, 1)).unwrap();
    assert_eq!(outcome.captured, vec![(1, 1)]);

    // White may not retake at once; the board stays exactly at the
    // position one ply before the rejected attempt.
    let before = game.clone();
    assert_eq!(game.play((1, 1)), Err(MoveError::Ko));
    assert_eq!(game, before);
    assert_eq!(game.board().get((1, 1)), Some(Stone::Empty));
    assert_eq!(game.board().get((2, 1)), Some(Stone::Black));
}

#[test]
fn ko_clears_after_an_intervening_exchange() {
    let mut game = ko_position();
    game.play((2, 1)).unwrap(); // black takes the ko

    // White plays a ko threat elsewhere, black answers.
    game.play((0, 4)).unwrap();
    game.play((4, 0)).unwrap();

    // Now the recapture no longer repeats the two-plies-ago position.
    let outcome = game.play((1, 1)).unwrap();
    assert_eq!(outcome.captured, vec![(2, 1)]);
    assert_eq!(game.caught().black, 1);
    assert_eq!(game.caught().white, 1);
}

// =============================================================================
// Rejections are transactional
// =============================================================================

#[test]
fn repeated_rejections_never_mutate_anything() {
    let mut game = setup(9, &[(4, 4), (3, 3)]);
    let before = game.clone();

    for _ in 0..3 {
        assert_eq!(game.play((4, 4)), Err(MoveError::Occupied));
        assert_eq!(game.play((3, 3)), Err(MoveError::Occupied));
        assert_eq!(game.play((-1, 2)), Err(MoveError::OutOfRange));
        assert_eq!(game.play((9, 9)), Err(MoveError::OutOfRange));
    }
    assert_eq!(game, before);
}

#[test]
fn rejected_moves_do_not_enter_the_ko_history() {
    let mut game = ko_position();
    game.play((2, 1)).unwrap();

    // A burst of illegal attempts between the capture and the recapture
    // must not widen or shift the ko window.
    for _ in 0..4 {
        let _ = game.play((2, 1));
        let _ = game.play((7, 7));
    }
    assert_eq!(game.play((1, 1)), Err(MoveError::Ko));
}

// =============================================================================
// Construction and lifecycle
// =============================================================================

#[test]
fn zero_size_board_is_refused() {
    assert_eq!(
        BoardEngine::new(0, Stone::Black).unwrap_err(),
        InvalidSize(0)
    );
}

#[test]
fn reset_discards_a_game_in_progress() {
    let mut game = setup(5, &[(2, 0), (1, 0), (1, 1), (0, 1)]);
    game.play((0, 0)).unwrap(); // capture, so counters are non-zero
    assert_eq!(game.caught().white, 1);

    game.reset(9, Stone::Black).unwrap();
    assert_eq!(game.board().size(), 9);
    assert_eq!(game.caught().white, 0);
    assert_eq!(game.move_count(), 0);
    assert!(game.board().points().all(|p| game.board().get(p) == Some(Stone::Empty)));
}

// =============================================================================
// Group partition over a played-out board
// =============================================================================

#[test]
fn groups_partition_all_stones_after_random_play() {
    let mut rng = fastrand::Rng::with_seed(42);
    let mut game = BoardEngine::new(9, Stone::Black).unwrap();

    // Play a few dozen random legal moves to get a messy board.
    let mut played = 0;
    while played < 60 {
        let p = (rng.i32(0..9), rng.i32(0..9));
        match game.play(p) {
            Ok(_) => played += 1,
            Err(MoveError::Occupied) | Err(MoveError::Suicide) | Err(MoveError::Ko) => {}
            Err(e) => panic!("unexpected rejection: {e}"),
        }
    }

    for color in [Stone::Black, Stone::White] {
        let mut grouped: Vec<_> = game
            .board()
            .groups(color)
            .iter()
            .flat_map(|g| g.stones().to_vec())
            .collect();
        let mut on_board: Vec<_> = game
            .board()
            .points()
            .filter(|&p| game.board().get(p) == Some(color))
            .collect();
        grouped.sort();
        on_board.sort();
        // No stone omitted, none claimed twice.
        assert_eq!(grouped, on_board);
        let mut deduped = grouped.clone();
        deduped.dedup();
        assert_eq!(deduped, grouped);
    }
}
