//! Behaviour every `GameStore` backend must share.

use uuid::Uuid;
use wordle_backend::domain::{evaluate, Dictionary, Game};
use wordle_backend::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use wordle_backend::GameStore;

fn dict() -> Dictionary {
    Dictionary::new(["apple", "crane", "slate"]).expect("valid words")
}

pub async fn create_then_load(store: &dyn GameStore) {
    let game = Game::new(Uuid::new_v4(), "apple");
    store.create(&game).await.expect("create");
    assert_eq!(store.load(game.id).await.expect("load"), game);
}

pub async fn duplicate_create_conflicts(store: &dyn GameStore) {
    let game = Game::new(Uuid::new_v4(), "apple");
    store.create(&game).await.expect("create");

    let other = Game::new(game.id, "crane");
    let err = store.create(&other).await.expect_err("id already taken");
    assert!(matches!(err, DomainError::Conflict(ConflictKind::GameExists, _)));
    assert_eq!(store.load(game.id).await.expect("load").solution, "apple");
}

pub async fn missing_game_is_not_found(store: &dyn GameStore) {
    let id = Uuid::new_v4();
    let err = store.load(id).await.expect_err("nothing stored");
    assert_eq!(
        err,
        DomainError::not_found(NotFoundKind::Game, format!("Game with id {id} not found"))
    );

    let err = store
        .save(&Game::new(id, "apple"))
        .await
        .expect_err("nothing to overwrite");
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Game, _)));
}

pub async fn versioned_save(store: &dyn GameStore) {
    let game = Game::new(Uuid::new_v4(), "apple");
    store.create(&game).await.expect("create");

    let mut first = game.clone();
    evaluate(&mut first, &dict(), "crane").expect("valid guess");
    let saved = store.save(&first).await.expect("save");
    assert_eq!(saved.lock_version, 1);
    assert_eq!(store.load(game.id).await.expect("load"), saved);

    // a writer still holding version 0 loses
    let mut stale = game.clone();
    evaluate(&mut stale, &dict(), "slate").expect("valid guess");
    let err = store.save(&stale).await.expect_err("stale version");
    assert!(err.is_optimistic_lock());

    let current = store.load(game.id).await.expect("load");
    assert_eq!(current, saved);
    assert_eq!(current.grid.row(0).expect("row 0")[0], Some('c'));
}

pub async fn ping_succeeds(store: &dyn GameStore) {
    store.ping().await.expect("store reachable");
}
