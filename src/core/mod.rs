//! Core scoring for the letter-draw game
//!
//! This module contains the draw type and the pure scoring pipeline:
//! normalization, letter matching, skeleton extraction, insertion counting,
//! order-bonus detection and aggregation. Nothing here does I/O or keeps
//! state between calls.

mod draw;
mod matching;
mod normalize;
mod score;

pub use draw::{DRAW_SIZE, Draw, DrawError};
pub use matching::{build_skeleton, count_insertions, has_order_bonus, used_letters};
pub use normalize::{normalize, normalize_letter};
pub use score::{ORDER_BONUS_POINTS, POINTS_PER_LETTER, PartLabel, ScorePart, ScoreResult, score_word};
