//! Best-word search
//!
//! Scores every word of a list against a draw and keeps the highest total.
//! Words are scored in parallel, but ties always go to the word that comes
//! first in the list.

use crate::core::{Draw, ScoreResult, score_word};
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::{Ordering, Reverse};
use tracing::debug;

/// Best word found for a draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestWord {
    /// The word as it appears in the word list
    pub word: String,
    /// Position of the word in the list
    pub index: usize,
    pub score: ScoreResult,
}

impl BestWord {
    #[must_use]
    pub fn total(&self) -> i32 {
        self.score.total
    }
}

/// Find the highest-scoring word for a draw
///
/// Returns `None` only if `words` is empty. Among words with the same total,
/// the one with the lowest index wins.
///
/// # Examples
/// ```
/// use letter_draw::core::Draw;
/// use letter_draw::game::find_best_word;
///
/// let draw: Draw = "RAME".parse().unwrap();
/// let words = ["OUF", "ARME", "RAME"].map(String::from);
///
/// let best = find_best_word(&draw, &words).unwrap();
/// assert_eq!(best.word, "RAME");
/// assert_eq!(best.total(), 15);
/// ```
#[must_use]
pub fn find_best_word<S: AsRef<str> + Sync>(draw: &Draw, words: &[S]) -> Option<BestWord> {
    let (index, total) = words
        .par_iter()
        .enumerate()
        .map(|(index, word)| (index, score_word(draw, word.as_ref()).total))
        .max_by(|a, b| compare_candidates(*a, *b))?;

    let word = words[index].as_ref();
    debug!(draw = %draw, word, total, candidates = words.len(), "best word found");

    Some(BestWord {
        word: word.to_string(),
        index,
        score: score_word(draw, word),
    })
}

/// Order candidates by total, then by earliest position
fn compare_candidates((index_a, total_a): (usize, i32), (index_b, total_b): (usize, i32)) -> Ordering {
    (total_a, Reverse(index_a)).cmp(&(total_b, Reverse(index_b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(letters: &str) -> Draw {
        letters.parse().unwrap()
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    /// Reference: single-threaded scan keeping the first maximum
    fn sequential_best(draw: &Draw, words: &[String]) -> Option<(usize, i32)> {
        let mut best: Option<(usize, i32)> = None;
        for (i, word) in words.iter().enumerate() {
            let total = score_word(draw, word).total;
            if best.is_none_or(|(_, best_total)| total > best_total) {
                best = Some((i, total));
            }
        }
        best
    }

    #[test]
    fn selects_highest_total() {
        let list = words(&["OUF", "ARME", "RAME", "MARE"]);
        let best = find_best_word(&draw("RAME"), &list).unwrap();

        assert_eq!(best.word, "RAME");
        assert_eq!(best.index, 2);
        assert_eq!(best.total(), 15);
        assert_eq!(best.score.skeleton_indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn ties_go_to_first_word() {
        // Both use R, A, M, E in order with no insertions
        let list = words(&["XRAME", "RAMEX", "RAME"]);
        let best = find_best_word(&draw("RAME"), &list).unwrap();

        assert_eq!(best.total(), 15);
        assert_eq!(best.word, "XRAME");
        assert_eq!(best.index, 0);
    }

    #[test]
    fn deterministic_across_runs() {
        let list: Vec<String> = (0..500)
            .map(|i| if i % 7 == 0 { "RAME".to_string() } else { format!("MER{i}") })
            .collect();

        let first = find_best_word(&draw("RAME"), &list).unwrap();
        for _ in 0..10 {
            let again = find_best_word(&draw("RAME"), &list).unwrap();
            assert_eq!(again.index, first.index);
        }
        assert_eq!(first.index, 0);
    }

    #[test]
    fn matches_sequential_scan() {
        let list = words(&[
            "ARBRE", "BAIGNER", "BANANE", "BENNA", "HERBIER", "TORPILLE", "BALLAST", "APERCEVRA",
            "ETE", "OUF", "RAMENER",
        ]);

        for letters in ["BANE", "RAME", "HRIR", "LLAS", "VRAR", "ETAI", "QWXZ"] {
            let d = draw(letters);
            let parallel = find_best_word(&d, &list).map(|b| (b.index, b.total()));
            assert_eq!(parallel, sequential_best(&d, &list), "draw {letters}");
        }
    }

    #[test]
    fn all_zero_scores_pick_first_word() {
        let list = words(&["OUF", "BOF", "PFF"]);
        let best = find_best_word(&draw("RAME"), &list).unwrap();

        assert_eq!(best.word, "OUF");
        assert_eq!(best.total(), 0);
    }

    #[test]
    fn negative_totals_still_produce_a_winner() {
        // A and B far apart: 6 - 10 insertions
        let list = words(&["ACCCCCCCCCCB"]);
        let best = find_best_word(&draw("ABYZ"), &list).unwrap();
        assert_eq!(best.total(), -4);
    }

    #[test]
    fn empty_list_returns_none() {
        let list: Vec<String> = Vec::new();
        assert!(find_best_word(&draw("RAME"), &list).is_none());
    }

    #[test]
    fn accepts_str_slices() {
        let list = ["rame", "été"];
        let best = find_best_word(&draw("ETAI"), &list).unwrap();
        assert_eq!(best.word, "été");
        assert_eq!(best.score.word, "ETE");
    }
}
