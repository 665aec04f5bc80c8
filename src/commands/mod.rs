//! Command implementations

pub mod benchmark;
pub mod best;
pub mod score;
pub mod simple;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, generate_draws, run_benchmark};
pub use best::{BestReport, best_command};
pub use score::score_command;
pub use simple::run_simple;
