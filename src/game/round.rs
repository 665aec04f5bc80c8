//! Round evaluation
//!
//! A round checks the submitted word before scoring it: empty words and
//! words missing from the dictionary are rejected with a zero total and no
//! breakdown.

use super::generator::DrawPolicy;
use crate::core::{Draw, ScoreResult, normalize, score_word};
use crate::wordlists::Dictionary;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Why a submitted word was not scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    /// Nothing left after normalization and trimming
    Empty,
    /// The dictionary does not know the word
    NotInDictionary,
}

impl InvalidReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::NotInDictionary => "not_in_dictionary",
        }
    }

    /// Human-readable description
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Empty => "empty word",
            Self::NotInDictionary => "word not in dictionary",
        }
    }
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scored breakdown or rejection reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum RoundOutcome {
    Scored { score: ScoreResult },
    Invalid { reason: InvalidReason },
}

/// Result of playing one word against a draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundResult {
    pub draw: Draw,
    pub raw_word: String,
    pub normalized_word: String,
    pub outcome: RoundOutcome,
}

impl RoundResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.outcome, RoundOutcome::Scored { .. })
    }

    /// Score breakdown, if the word was accepted
    #[must_use]
    pub const fn score(&self) -> Option<&ScoreResult> {
        match &self.outcome {
            RoundOutcome::Scored { score } => Some(score),
            RoundOutcome::Invalid { .. } => None,
        }
    }

    #[must_use]
    pub const fn invalid_reason(&self) -> Option<InvalidReason> {
        match self.outcome {
            RoundOutcome::Scored { .. } => None,
            RoundOutcome::Invalid { reason } => Some(reason),
        }
    }

    /// Score total, 0 for rejected words
    #[must_use]
    pub fn total(&self) -> i32 {
        self.score().map_or(0, |score| score.total)
    }
}

/// Generate the draw for a new round
pub fn create_draw<R: Rng + ?Sized>(policy: DrawPolicy, rng: &mut R) -> Draw {
    policy.generate(rng)
}

/// Evaluate a submitted word
///
/// The word is normalized and trimmed, checked for emptiness, then looked up
/// in the dictionary (which receives the normalized form) and finally scored.
///
/// # Examples
/// ```
/// use letter_draw::core::Draw;
/// use letter_draw::game::{InvalidReason, evaluate_round};
/// use letter_draw::wordlists::SetDictionary;
///
/// let draw: Draw = "RAME".parse().unwrap();
/// let dict = SetDictionary::from_words(["rame"]);
///
/// let result = evaluate_round(&draw, "rame", &dict);
/// assert_eq!(result.total(), 15);
///
/// let result = evaluate_round(&draw, "ramer", &dict);
/// assert_eq!(result.invalid_reason(), Some(InvalidReason::NotInDictionary));
/// ```
pub fn evaluate_round<D: Dictionary + ?Sized>(
    draw: &Draw,
    raw_word: &str,
    dictionary: &D,
) -> RoundResult {
    let normalized_word = normalize(raw_word).trim().to_string();

    let outcome = if normalized_word.is_empty() {
        RoundOutcome::Invalid {
            reason: InvalidReason::Empty,
        }
    } else if !dictionary.has(&normalized_word) {
        RoundOutcome::Invalid {
            reason: InvalidReason::NotInDictionary,
        }
    } else {
        RoundOutcome::Scored {
            score: score_word(draw, &normalized_word),
        }
    };

    debug!(
        draw = %draw,
        word = %normalized_word,
        valid = matches!(outcome, RoundOutcome::Scored { .. }),
        "evaluated round"
    );

    RoundResult {
        draw: *draw,
        raw_word: raw_word.to_string(),
        normalized_word,
        outcome,
    }
}
