//! Game layer
//!
//! Everything around the scorer: draw generation, round validation,
//! best-word search and session tracking.

pub mod generator;
mod round;
mod search;
mod session;

pub use generator::{DrawPolicy, generate_draw_uniform, generate_draw_weighted};
pub use round::{InvalidReason, RoundOutcome, RoundResult, create_draw, evaluate_round};
pub use search::{BestWord, find_best_word};
pub use session::{HISTORY_LIMIT, Session};
