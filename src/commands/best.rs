//! Best word command
//!
//! Searches the whole dictionary for the highest-scoring word of a draw.

use crate::core::Draw;
use crate::error::GameResult;
use crate::game::{BestWord, find_best_word};
use crate::wordlists::SetDictionary;
use std::time::{Duration, Instant};

/// Result of a best-word search
pub struct BestReport {
    pub draw: Draw,
    pub best: Option<BestWord>,
    pub candidates: usize,
    pub duration: Duration,
}

/// Find the best dictionary word for a draw written as text
///
/// # Errors
///
/// Returns an error if the draw is not exactly 4 letters.
pub fn best_command(draw: &str, dictionary: &SetDictionary) -> GameResult<BestReport> {
    let draw: Draw = draw.parse()?;

    let start = Instant::now();
    let best = find_best_word(&draw, dictionary.words());

    Ok(BestReport {
        draw,
        best,
        candidates: dictionary.len(),
        duration: start.elapsed(),
    })
}
