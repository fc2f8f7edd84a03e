//! Game engine
//!
//! Feedback partitioning, the adversarial bucket oracle, the per-game state
//! machine and the concurrent session store.

mod error;
mod oracle;
mod partition;
mod session;
mod store;

pub use error::GameError;
pub use oracle::{CORRECT_WEIGHT, PRESENT_WEIGHT, information_score, select_worst_case_bucket};
pub use partition::{Buckets, max_bucket_size, partition};
pub use session::{
    DEFAULT_MAX_ATTEMPTS, GameSession, GameStatus, GuessResult, Mode, SessionId, SessionSnapshot,
    SettingsUpdate,
};
pub use store::{NewSession, SessionStore};
