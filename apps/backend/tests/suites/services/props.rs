//! Property tests over random guess sequences.
//!
//! Increase cases locally with: PROPTEST_CASES=500 cargo test --test services_tests

use std::env;
use std::sync::Arc;

use proptest::prelude::*;
use uuid::Uuid;
use wordle_backend::domain::{Dictionary, Game, GameStatus};
use wordle_backend::{DisabledHints, ErrorCode, GameService, GameStore, MemoryGameStore};

const WORDS: [&str; 6] = ["crane", "slate", "apple", "trace", "alarm", "llama"];

fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Dictionary words mixed with malformed and unknown guesses.
fn guess_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        6 => prop::sample::select(WORDS.to_vec()).prop_map(str::to_string),
        1 => Just("zzzzz".to_string()),
        1 => "[a-z]{0,7}",
    ]
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn stored_game_tracks_accepted_guesses(
        solution in prop::sample::select(WORDS.to_vec()),
        guesses in prop::collection::vec(guess_strategy(), 0..12),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime");

        rt.block_on(async {
            let store = Arc::new(MemoryGameStore::new());
            let game = Game::new(Uuid::new_v4(), solution);
            store.create(&game).await.expect("create");
            let dictionary = Dictionary::new(WORDS).expect("valid words");
            let service = GameService::new(store.clone(), Arc::new(dictionary), Arc::new(DisabledHints));

            let mut accepted = 0;
            let mut finished = false;
            for guess in &guesses {
                let before = store.raw(game.id);
                match service.submit_guess(game.id, guess, None).await {
                    Ok((saved, outcome)) => {
                        prop_assert!(!finished, "guess accepted after the game ended");
                        accepted += 1;
                        prop_assert_eq!(saved.lock_version, accepted);
                        prop_assert_eq!(outcome.status == GameStatus::Solved, guess == solution);
                        finished = outcome.status.is_finished();
                    }
                    Err(err) => {
                        if finished {
                            prop_assert_eq!(err.code(), ErrorCode::GameFinished);
                        } else {
                            prop_assert!(matches!(
                                err.code(),
                                ErrorCode::InvalidGuess | ErrorCode::WordNotInDictionary
                            ));
                        }
                        prop_assert_eq!(store.raw(game.id), before);
                    }
                }
            }

            let stored = store.load(game.id).await.expect("load");
            prop_assert_eq!(stored.lock_version, accepted);
            prop_assert!(stored.current_row <= 5);
            let filled = (0..6).filter(|&r| stored.grid.is_row_filled(r)).count();
            prop_assert_eq!(filled, usize::try_from(accepted).expect("non-negative"));
            prop_assert_eq!(stored.is_finished(), finished);
            Ok(())
        })?;
    }
}
