//! Word scoring
//!
//! Combines the matching stages into a single itemized score:
//!
//! - base: 3 points per draw letter used (duplicates included)
//! - order bonus: 3 points when the skeleton spells the draw in order
//! - insertions: -1 per extra letter threaded between skeleton letters

use super::draw::Draw;
use super::matching::{build_skeleton, count_insertions, has_order_bonus, used_letters};
use super::normalize::normalize;
use serde::Serialize;
use std::fmt;

/// Points awarded per draw letter used in the word
pub const POINTS_PER_LETTER: i32 = 3;

/// Points awarded when the word spells the draw in order
pub const ORDER_BONUS_POINTS: i32 = 3;

/// Label of one contribution in a score breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartLabel {
    Base,
    OrderBonus,
    Insertions,
}

impl PartLabel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::OrderBonus => "order_bonus",
            Self::Insertions => "insertions",
        }
    }
}

impl fmt::Display for PartLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled contribution to the total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScorePart {
    pub label: PartLabel,
    pub value: i32,
}

impl ScorePart {
    const fn new(label: PartLabel, value: i32) -> Self {
        Self { label, value }
    }
}

/// Full breakdown of a word's score against a draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// The draw the word was scored against
    pub draw: Draw,
    /// Normalized, trimmed word
    pub word: String,
    /// Draw letters matched in the word, in draw order, with duplicates
    pub used_letters: Vec<char>,
    /// Character positions of the skeleton in `word`, strictly increasing
    pub skeleton_indices: Vec<usize>,
    /// Non-skeleton letters between the first and last skeleton letters
    pub insertions: usize,
    /// Whether the skeleton spells the draw in its original order
    pub order_bonus: bool,
    /// `base + order_bonus - insertions`
    pub total: i32,
    /// `[base, order_bonus, insertions]`, summing to `total`
    pub parts: [ScorePart; 3],
}

impl ScoreResult {
    /// Whether every draw letter was used
    #[must_use]
    pub fn uses_all_letters(&self) -> bool {
        self.used_letters.len() == self.draw.len()
    }

    /// Value of a single part of the breakdown
    #[must_use]
    pub fn part(&self, label: PartLabel) -> i32 {
        self.parts
            .iter()
            .find(|part| part.label == label)
            .map_or(0, |part| part.value)
    }
}

/// Score a raw word against a draw
///
/// The word is normalized and trimmed first. Words sharing no letter with
/// the draw score zero without computing a skeleton.
///
/// # Examples
/// ```
/// use letter_draw::core::{Draw, score_word};
///
/// let draw: Draw = "BANE".parse().unwrap();
/// let result = score_word(&draw, "baigner");
///
/// assert_eq!(result.word, "BAIGNER");
/// assert_eq!(result.skeleton_indices, vec![0, 1, 4, 5]);
/// assert_eq!(result.insertions, 2);
/// assert!(result.order_bonus);
/// assert_eq!(result.total, 13); // 12 + 3 - 2
/// ```
#[must_use]
pub fn score_word(draw: &Draw, raw_word: &str) -> ScoreResult {
    let word = normalize(raw_word).trim().to_string();
    let chars: Vec<char> = word.chars().collect();

    let used = used_letters(draw, &chars);
    if used.is_empty() {
        return ScoreResult {
            draw: *draw,
            word,
            used_letters: used,
            skeleton_indices: Vec::new(),
            insertions: 0,
            order_bonus: false,
            total: 0,
            parts: breakdown(0, 0, 0),
        };
    }

    let base = used.len() as i32 * POINTS_PER_LETTER;

    let skeleton_indices = build_skeleton(draw, &chars);
    let insertions = count_insertions(&skeleton_indices);
    let order_bonus = has_order_bonus(draw, &chars, &skeleton_indices);
    let bonus = if order_bonus { ORDER_BONUS_POINTS } else { 0 };

    let penalty = insertions as i32;

    ScoreResult {
        draw: *draw,
        word,
        used_letters: used,
        skeleton_indices,
        insertions,
        order_bonus,
        total: base + bonus - penalty,
        parts: breakdown(base, bonus, penalty),
    }
}

const fn breakdown(base: i32, bonus: i32, penalty: i32) -> [ScorePart; 3] {
    [
        ScorePart::new(PartLabel::Base, base),
        ScorePart::new(PartLabel::OrderBonus, bonus),
        ScorePart::new(PartLabel::Insertions, -penalty),
    ]
}
