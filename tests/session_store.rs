use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use wordle_host::core::WordList;
use wordle_host::engine::{GameError, SessionStore, SettingsUpdate};
use wordle_host::wordlists::default_word_list;

fn words() -> WordList {
    WordList::from_strs(["react", "swift", "scala", "unity", "crane", "slate", "trace"])
}

#[test]
fn same_session_guesses_are_serialized() {
    let store = Arc::new(SessionStore::with_seed(words(), 21).with_max_attempts(100));
    let id = store.new_session().unwrap().session_id;

    // Restart classic games until the target is SWIFT, so REACT never wins
    let classic = SettingsUpdate {
        word_list: Some(vec!["react".into(), "swift".into()]),
        host_cheating: false,
        ..SettingsUpdate::default()
    };
    loop {
        store.update_settings(&id, classic.clone()).unwrap();
        if !store.submit_guess(&id, "react").unwrap().game_over {
            break;
        }
    }
    let wrong = "REACT";

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let id = id.clone();
            thread::spawn(move || {
                (0..10)
                    .map(|_| store.submit_guess(&id, wrong).unwrap().guesses.len())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for len in handle.join().unwrap() {
            assert!(seen.insert(len), "history length {len} observed twice");
        }
    }

    // One opening guess plus 80 concurrent guesses, each seeing a distinct history length
    assert_eq!(seen.len(), 80);
    assert_eq!(store.snapshot(&id).unwrap().guesses.len(), 81);
}

#[test]
fn different_sessions_progress_independently() {
    let store = Arc::new(SessionStore::with_seed(default_word_list(), 5));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let id = store.new_session().unwrap().session_id;
                let mut results = Vec::new();
                for guess in ["crane", "slate", "react"] {
                    results.push(store.submit_guess(&id, guess).unwrap().guesses.len());
                }
                (id, results)
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let (id, results) = handle.join().unwrap();
        assert_eq!(results, [1, 2, 3]);
        assert_eq!(store.snapshot(&id).unwrap().guesses, ["CRANE", "SLATE", "REACT"]);
        assert!(ids.insert(id));
    }
    assert_eq!(store.active_sessions().len(), 8);
}

#[test]
fn adversarial_pools_never_grow_under_concurrency() {
    let store = Arc::new(SessionStore::with_seed(default_word_list(), 8));
    let id = store.new_session().unwrap().session_id;
    let start = store.snapshot(&id).unwrap().pool_size.unwrap();

    let handles: Vec<_> = ["crane", "slate", "react", "swift"]
        .into_iter()
        .map(|guess| {
            let store = Arc::clone(&store);
            let id = id.clone();
            thread::spawn(move || {
                let _ = store.submit_guess(&id, guess);
                store.snapshot(&id).unwrap().pool_size.unwrap()
            })
        })
        .collect();

    for handle in handles {
        let size = handle.join().unwrap();
        assert!((1..=start).contains(&size));
    }
}

#[test]
fn removed_session_is_not_found() {
    let store = SessionStore::with_seed(words(), 2);
    let id = store.new_session().unwrap().session_id;
    assert!(store.remove_session(&id));
    assert_eq!(
        store.submit_guess(&id, "react"),
        Err(GameError::SessionNotFound(id))
    );
}
