//! Live session registry
//!
//! The map lock is held only long enough to find a session; each session has
//! its own mutex, so requests for different sessions never wait on each other
//! while requests for the same session run one at a time.

use super::error::GameError;
use super::session::{
    DEFAULT_MAX_ATTEMPTS, GameSession, GuessResult, SessionId, SessionSnapshot, SettingsUpdate,
};
use crate::core::WordList;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, TryLockError};
use std::time::Duration;
use uuid::Uuid;

/// Identity handed back for a freshly created session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub session_id: SessionId,
    pub max_attempts: usize,
}

#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<FxHashMap<SessionId, Arc<Mutex<GameSession>>>>,
    default_words: WordList,
    default_max_attempts: usize,
    rng: Mutex<StdRng>,
}

impl SessionStore {
    /// Store seeded from OS entropy
    #[must_use]
    pub fn new(default_words: WordList) -> Self {
        Self::with_rng(default_words, StdRng::from_os_rng())
    }

    /// Store whose every random draw is reproducible from `seed`
    #[must_use]
    pub fn with_seed(default_words: WordList, seed: u64) -> Self {
        Self::with_rng(default_words, StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn with_rng(default_words: WordList, rng: StdRng) -> Self {
        Self {
            sessions: RwLock::new(FxHashMap::default()),
            default_words,
            default_max_attempts: DEFAULT_MAX_ATTEMPTS,
            rng: Mutex::new(rng),
        }
    }

    /// Attempts given to sessions created from now on (zero is ignored)
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        if max_attempts > 0 {
            self.default_max_attempts = max_attempts;
        }
        self
    }

    /// Create an adversarial session over the default word source
    ///
    /// # Errors
    /// `EmptyWordSource` if the default word source is empty.
    pub fn new_session(&self) -> Result<NewSession, GameError> {
        self.create_session(self.default_words.clone())
    }

    /// Create an adversarial session over `words`
    ///
    /// # Errors
    /// `EmptyWordSource` if `words` is empty.
    pub fn create_session(&self, words: WordList) -> Result<NewSession, GameError> {
        let id = Uuid::new_v4().to_string();
        let rng = StdRng::from_rng(&mut *lock(&self.rng));
        let session = GameSession::new(id.clone(), words, self.default_max_attempts, rng)?;
        let max_attempts = session.max_attempts();

        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), Arc::new(Mutex::new(session)));

        Ok(NewSession {
            session_id: id,
            max_attempts,
        })
    }

    /// # Errors
    /// `SessionNotFound`, or any guess validation error from the session.
    pub fn submit_guess(&self, id: &str, guess: &str) -> Result<GuessResult, GameError> {
        self.with_session(id, |session| session.submit_guess(guess))
    }

    /// # Errors
    /// `SessionNotFound`, or `EmptyWordSource` if the update would leave no words.
    pub fn update_settings(&self, id: &str, update: SettingsUpdate) -> Result<(), GameError> {
        self.with_session(id, |session| session.update_settings(update))
    }

    /// # Errors
    /// `SessionNotFound`.
    pub fn get_word_list(&self, id: &str) -> Result<Vec<String>, GameError> {
        self.with_session(id, |session| Ok(session.word_list().to_strings()))
    }

    /// # Errors
    /// `SessionNotFound`.
    pub fn snapshot(&self, id: &str) -> Result<SessionSnapshot, GameError> {
        self.with_session(id, |session| Ok(session.snapshot()))
    }

    /// Drop a session; returns whether it existed
    pub fn remove_session(&self, id: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some()
    }

    /// Drop every session idle for longer than `ttl`; returns how many went
    ///
    /// A session whose lock is held is serving a request and is never idle,
    /// so it is skipped rather than waited on.
    pub fn cleanup_expired(&self, ttl: Duration) -> usize {
        let candidates: Vec<(SessionId, Arc<Mutex<GameSession>>)> = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(id, session)| (id.clone(), Arc::clone(session)))
            .collect();

        let expired: Vec<SessionId> = candidates
            .into_iter()
            .filter(|(_, session)| match session.try_lock() {
                Ok(guard) => guard.is_expired(ttl),
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner().is_expired(ttl),
                Err(TryLockError::WouldBlock) => false,
            })
            .map(|(id, _)| id)
            .collect();

        if expired.is_empty() {
            return 0;
        }

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        expired
            .iter()
            .filter(|id| sessions.remove(id.as_str()).is_some())
            .count()
    }

    #[must_use]
    pub fn active_sessions(&self) -> Vec<SessionId> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn default_words(&self) -> &WordList {
        &self.default_words
    }

    fn session(&self, id: &str) -> Result<Arc<Mutex<GameSession>>, GameError> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| GameError::SessionNotFound(id.to_string()))
    }

    fn with_session<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut GameSession) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let session = self.session(id)?;
        let mut guard = lock(&session);
        guard.touch();
        f(&mut guard)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::session::GameStatus;

    fn store() -> SessionStore {
        SessionStore::with_seed(WordList::from_strs(["react", "swift", "scala", "unity"]), 9)
    }

    #[test]
    fn new_session_defaults() {
        let store = store();
        let created = store.new_session().unwrap();

        assert_eq!(created.max_attempts, 6);
        assert_eq!(store.active_sessions(), vec![created.session_id.clone()]);

        let snapshot = store.snapshot(&created.session_id).unwrap();
        assert_eq!(snapshot.status, GameStatus::New);
        assert!(snapshot.host_cheating);
        assert_eq!(snapshot.pool_size, Some(4));
    }

    #[test]
    fn session_ids_are_unique() {
        let store = store();
        let a = store.new_session().unwrap().session_id;
        let b = store.new_session().unwrap().session_id;
        assert_ne!(a, b);
    }

    #[test]
    fn configured_max_attempts_applies_to_new_sessions() {
        let store = store().with_max_attempts(3);
        assert_eq!(store.new_session().unwrap().max_attempts, 3);
    }

    #[test]
    fn empty_default_source_is_rejected() {
        let store = SessionStore::with_seed(WordList::default(), 1);
        assert_eq!(store.new_session(), Err(GameError::EmptyWordSource));
        assert!(store.active_sessions().is_empty());
    }

    #[test]
    fn unknown_session_is_not_found() {
        let store = store();
        let missing = GameError::SessionNotFound("nope".to_string());

        assert_eq!(store.submit_guess("nope", "react"), Err(missing.clone()));
        assert_eq!(
            store.update_settings("nope", SettingsUpdate::default()),
            Err(missing.clone())
        );
        assert_eq!(store.get_word_list("nope"), Err(missing));
    }

    #[test]
    fn word_list_follows_settings() {
        let store = store();
        let id = store.new_session().unwrap().session_id;
        assert_eq!(
            store.get_word_list(&id).unwrap(),
            ["REACT", "SWIFT", "SCALA", "UNITY"]
        );

        store
            .update_settings(
                &id,
                SettingsUpdate {
                    word_list: Some(vec!["crane".into(), "slate".into()]),
                    host_cheating: false,
                    ..SettingsUpdate::default()
                },
            )
            .unwrap();

        assert_eq!(store.get_word_list(&id).unwrap(), ["CRANE", "SLATE"]);
        assert!(!store.snapshot(&id).unwrap().host_cheating);
    }

    #[test]
    fn guesses_go_to_the_right_session() {
        let store = store();
        let a = store.new_session().unwrap().session_id;
        let b = store.new_session().unwrap().session_id;

        store.submit_guess(&a, "react").unwrap();

        assert_eq!(store.snapshot(&a).unwrap().guesses, ["REACT"]);
        assert!(store.snapshot(&b).unwrap().guesses.is_empty());
    }

    #[test]
    fn remove_and_expire() {
        let store = store();
        let a = store.new_session().unwrap().session_id;
        let _b = store.new_session().unwrap().session_id;

        assert!(store.remove_session(&a));
        assert!(!store.remove_session(&a));
        assert_eq!(store.active_sessions().len(), 1);

        assert_eq!(store.cleanup_expired(Duration::from_secs(3600)), 0);
        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(store.cleanup_expired(Duration::from_millis(5)), 1);
        assert!(store.active_sessions().is_empty());
    }

    #[test]
    fn cleanup_skips_busy_session_without_blocking_others() {
        use std::sync::mpsc;
        use std::thread;

        let store = Arc::new(store());
        let busy = store.new_session().unwrap().session_id;
        let idle = store.new_session().unwrap().session_id;
        thread::sleep(Duration::from_millis(20));

        let handle = store.session(&busy).unwrap();
        let held = lock(&handle);

        let (cleanup_tx, cleanup_rx) = mpsc::channel();
        let cleaner = Arc::clone(&store);
        thread::spawn(move || {
            let _ = cleanup_tx.send(cleaner.cleanup_expired(Duration::from_millis(5)));
        });
        let removed = cleanup_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("cleanup waited on a busy session");

        // Only the idle session went; the busy one is in use, not idle
        assert_eq!(removed, 1);
        assert_eq!(store.active_sessions(), vec![busy.clone()]);
        assert_eq!(
            store.submit_guess(&idle, "react"),
            Err(GameError::SessionNotFound(idle))
        );

        let other = store.new_session().unwrap().session_id;
        let (guess_tx, guess_rx) = mpsc::channel();
        let guesser = Arc::clone(&store);
        thread::spawn(move || {
            let _ = guess_tx.send(guesser.submit_guess(&other, "react"));
        });
        let result = guess_rx
            .recv_timeout(Duration::from_secs(2))
            .expect("unrelated session blocked");
        assert!(result.is_ok());

        drop(held);
        assert_eq!(store.snapshot(&busy).unwrap().status, GameStatus::New);
    }

    #[test]
    fn seeded_stores_draw_the_same_targets() {
        let classic = SettingsUpdate {
            host_cheating: false,
            ..SettingsUpdate::default()
        };
        let play = |store: &SessionStore| {
            let id = store.new_session().unwrap().session_id;
            store.update_settings(&id, classic.clone()).unwrap();
            store
                .update_settings(
                    &id,
                    SettingsUpdate {
                        max_attempts: Some(1),
                        ..classic.clone()
                    },
                )
                .unwrap();
            // One guess ends the game either way, and the message names the target
            store.submit_guess(&id, "react").unwrap().message
        };

        assert_eq!(play(&store()), play(&store()));
    }
}
