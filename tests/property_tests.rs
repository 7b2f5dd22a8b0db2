//! Property tests over random move sequences.

use proptest::prelude::*;

use sos_engine::rules::count_all;
use sos_engine::{GameEngine, GameMode, GameStatus, Letter, SosError};

fn any_letter() -> impl Strategy<Value = Letter> {
    prop_oneof![Just(Letter::S), Just(Letter::O)]
}

/// Moves may land off the board or on occupied cells; those are rejected.
fn move_list() -> impl Strategy<Value = Vec<(isize, isize, Letter)>> {
    prop::collection::vec((-1isize..11, -1isize..11, any_letter()), 0..160)
}

/// Fill every remaining cell in row-major order, alternating letters by
/// the given pattern.
fn fill(engine: &mut GameEngine, pattern: &[Letter]) {
    let empty: Vec<_> = engine.board().empty_cells().collect();
    for (i, coord) in empty.into_iter().enumerate() {
        let letter = pattern[i % pattern.len()];
        engine.place_letter(coord.row, coord.col, letter).unwrap();
    }
}

proptest! {
    #[test]
    fn prop_invalid_sizes_rejected(size in prop_oneof![0usize..3, 11usize..64]) {
        for mode in [GameMode::Simple, GameMode::General] {
            prop_assert_eq!(
                GameEngine::new(size, mode, 0).unwrap_err(),
                SosError::InvalidSize { size }
            );
        }
    }

    #[test]
    fn prop_fresh_engine(size in 3usize..=10, seed in any::<u64>()) {
        let engine = GameEngine::new(size, GameMode::General, seed).unwrap();
        prop_assert_eq!(engine.board().cells().len(), size * size);
        prop_assert_eq!(engine.board().filled_count(), 0);
        prop_assert_eq!(engine.scores().total(), 0);
    }

    /// Accepted moves alternate the turn, rejected ones change nothing.
    #[test]
    fn prop_turns_and_rejections(
        size in 3usize..=10,
        seed in any::<u64>(),
        moves in move_list(),
    ) {
        let mut engine = GameEngine::new(size, GameMode::General, seed).unwrap();

        for (row, col, letter) in moves {
            let before = engine.snapshot();
            match engine.place_letter(row, col, letter) {
                Ok(outcome) => {
                    prop_assert_eq!(outcome.mover(), before.current_turn);
                    prop_assert_eq!(engine.current_turn(), before.current_turn.opponent());
                    prop_assert_eq!(
                        engine.score(outcome.mover()),
                        before.scores[outcome.mover()] + outcome.points()
                    );
                    prop_assert_eq!(engine.history().len(), before.history.len() + 1);
                }
                Err(_) => {
                    prop_assert_eq!(engine.snapshot(), before);
                }
            }
        }
    }

    /// Scores sum to the number of distinct sequences on the board, and the
    /// game ends exactly when the board fills.
    #[test]
    fn prop_general_scores_match_board(
        size in 3usize..=6,
        seed in any::<u64>(),
        moves in move_list(),
        pattern in prop::collection::vec(any_letter(), 1..5),
    ) {
        let mut engine = GameEngine::new(size, GameMode::General, seed).unwrap();

        for (row, col, letter) in moves {
            if engine.place_letter(row, col, letter).is_ok() {
                prop_assert_eq!(engine.scores().total() as usize, count_all(engine.board()));
                prop_assert_eq!(engine.is_game_over(), engine.is_full());
            }
        }

        if !engine.is_game_over() {
            fill(&mut engine, &pattern);
        }

        prop_assert!(engine.is_full());
        prop_assert_eq!(engine.scores().total() as usize, count_all(engine.board()));
        prop_assert_eq!(engine.status(), GameStatus::Finished(engine.winner_by_score()));
    }

    /// In Simple mode the engine is always mid-game or drawn: wins reset.
    #[test]
    fn prop_simple_never_holds_a_win(
        size in 3usize..=5,
        seed in any::<u64>(),
        moves in move_list(),
    ) {
        let mut engine = GameEngine::new(size, GameMode::Simple, seed).unwrap();

        for (row, col, letter) in moves {
            if let Ok(outcome) = engine.place_letter(row, col, letter) {
                prop_assert!(outcome.formed.len() <= 1);
                prop_assert_eq!(outcome.reset, !outcome.formed.is_empty());
                if outcome.reset {
                    prop_assert_eq!(outcome.winner(), Some(outcome.mover()));
                    prop_assert_eq!(engine.board().filled_count(), 0);
                }
                prop_assert_eq!(count_all(engine.board()), 0);
            }
        }
    }
}
