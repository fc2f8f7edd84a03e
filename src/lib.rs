//! Wordle Host
//!
//! A five-letter word game host. In classic mode the answer is fixed when the
//! game starts; in adversarial mode the host commits to nothing and answers
//! every guess with the feedback that reveals the least.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_host::core::WordList;
//! use wordle_host::engine::SessionStore;
//!
//! let store = SessionStore::with_seed(WordList::from_strs(["react", "swift", "scala"]), 7);
//! let session = store.new_session().unwrap();
//!
//! let result = store.submit_guess(&session.session_id, "swift").unwrap();
//! assert!(result.host_cheating);
//! assert_eq!(result.guesses, ["SWIFT"]);
//! ```

// Core domain types
pub mod core;

// Feedback partitioning, adversarial oracle, sessions
pub mod engine;

// Word lists
pub mod wordlists;

// Shared front-end configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
