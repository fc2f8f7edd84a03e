//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;

pub use analyze::{AnalysisResult, BucketSummary, analyze_guess};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, GameRecord, play_one, run_benchmark};
pub use simple::{Action, SimpleGame, run_simple};
