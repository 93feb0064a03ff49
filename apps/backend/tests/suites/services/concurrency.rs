//! Lost write races against the compare-and-swap save.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use uuid::Uuid;
use wordle_backend::domain::{Dictionary, Game};
use wordle_backend::{AppError, DisabledHints, ErrorCode, GameService, GameStore};

use crate::support::fakes::RacingStore;

const WORDS: [&str; 3] = ["crane", "slate", "apple"];

async fn racing_service(races: u32) -> Result<(GameService, Arc<RacingStore>, Uuid), AppError> {
    let store = RacingStore::new(races);
    let game = Game::new(Uuid::new_v4(), "crane");
    store.create(&game).await?;

    let dictionary = Dictionary::new(WORDS).expect("test words are valid");
    let service = GameService::new(store.clone(), Arc::new(dictionary), Arc::new(DisabledHints));
    Ok((service, store, game.id))
}

#[tokio::test]
async fn one_lost_race_is_retried() -> Result<(), AppError> {
    let (service, store, id) = racing_service(1).await?;

    let (saved, outcome) = service.submit_guess(id, "slate", None).await?;

    assert_eq!(store.saves.load(Ordering::SeqCst), 2);
    // one bump from the competing writer, one from this guess
    assert_eq!(saved.lock_version, 2);
    assert_eq!(saved.current_row, 1);
    assert_eq!(outcome.guess, "slate");

    let stored = store.load(id).await?;
    assert_eq!(stored, saved);
    Ok(())
}

#[tokio::test]
async fn retries_stop_at_the_limit() -> Result<(), AppError> {
    let (service, store, id) = racing_service(10).await?;
    let limit = service.retry_limit();

    let err = service
        .submit_guess(id, "slate", None)
        .await
        .expect_err("every attempt loses");

    assert_eq!(err.code(), ErrorCode::OptimisticLock);
    assert_eq!(
        err.detail(),
        format!("Game {id} is being modified concurrently. Please retry.")
    );
    assert_eq!(store.saves.load(Ordering::SeqCst), limit);

    // only the competing writer got through; the guess never landed
    let stored = store.load(id).await?;
    assert_eq!(stored.current_row, 0);
    assert_eq!(stored.lock_version, i32::try_from(limit).expect("small limit"));
    Ok(())
}

#[tokio::test]
async fn custom_retry_limit_is_honoured() -> Result<(), AppError> {
    let (service, store, id) = racing_service(4).await?;
    let service = service.with_retry_limit(5);

    service.submit_guess(id, "slate", None).await?;
    assert_eq!(store.saves.load(Ordering::SeqCst), 5);
    Ok(())
}

#[tokio::test]
async fn conditional_guess_is_not_retried() -> Result<(), AppError> {
    let (service, store, id) = racing_service(1).await?;

    let err = service
        .submit_guess(id, "slate", Some(0))
        .await
        .expect_err("the race is final under If-Match");

    assert_eq!(err.code(), ErrorCode::OptimisticLock);
    assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    assert_eq!(store.load(id).await?.current_row, 0);
    Ok(())
}

#[tokio::test]
async fn parallel_guesses_all_land_on_distinct_rows() -> Result<(), AppError> {
    let (service, store, id) = racing_service(0).await?;
    let service = service.with_retry_limit(10);

    let mut handles = Vec::new();
    for _ in 0..3 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.submit_guess(id, "slate", None).await
        }));
    }

    let mut versions = Vec::new();
    for handle in handles {
        let (saved, _) = handle.await.expect("task joined")?;
        versions.push(saved.lock_version);
    }
    versions.sort_unstable();
    assert_eq!(versions, vec![1, 2, 3]);

    let stored = store.load(id).await?;
    assert_eq!(stored.current_row, 3);
    assert_eq!(stored.lock_version, 3);
    Ok(())
}
