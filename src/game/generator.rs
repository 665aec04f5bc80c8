//! Draw generation
//!
//! Draws are sampled letter by letter, with replacement, from a weighted
//! pool in which the rarest letters appear once and every other letter four
//! times.

use crate::core::{DRAW_SIZE, Draw};
use rand::Rng;

/// The 8 rarest letters, drawn with weight 1
pub const RARE_LETTERS: [char; 8] = ['J', 'K', 'Q', 'W', 'X', 'Y', 'Z', 'H'];

const RARE_WEIGHT: usize = 1;
const COMMON_WEIGHT: usize = 4;

/// Size of the weighted pool: 18 common letters × 4 + 8 rare letters × 1
pub const WEIGHTED_POOL_SIZE: usize =
    (26 - RARE_LETTERS.len()) * COMMON_WEIGHT + RARE_LETTERS.len() * RARE_WEIGHT;

/// Weighted letter pool, alphabetical
pub static WEIGHTED_POOL: [char; WEIGHTED_POOL_SIZE] = build_weighted_pool();

const fn is_rare(letter: char) -> bool {
    let mut i = 0;
    while i < RARE_LETTERS.len() {
        if RARE_LETTERS[i] == letter {
            return true;
        }
        i += 1;
    }
    false
}

const fn build_weighted_pool() -> [char; WEIGHTED_POOL_SIZE] {
    let mut pool = ['A'; WEIGHTED_POOL_SIZE];
    let mut idx = 0;
    let mut offset = 0u8;

    while offset < 26 {
        let letter = (b'A' + offset) as char;
        let weight = if is_rare(letter) {
            RARE_WEIGHT
        } else {
            COMMON_WEIGHT
        };

        let mut copies = 0;
        while copies < weight {
            pool[idx] = letter;
            idx += 1;
            copies += 1;
        }
        offset += 1;
    }

    pool
}

/// How draw letters are sampled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawPolicy {
    /// Common letters four times as likely as rare ones (default)
    #[default]
    Weighted,
    /// Every letter of A-Z equally likely
    Uniform,
}

impl DrawPolicy {
    /// Create a policy from its name
    ///
    /// Supported names: "weighted", "uniform". Defaults to weighted if the
    /// name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "uniform" => Self::Uniform,
            _ => Self::Weighted,
        }
    }

    /// Generate a draw with this policy
    pub fn generate<R: Rng + ?Sized>(self, rng: &mut R) -> Draw {
        match self {
            Self::Weighted => generate_draw_weighted(rng),
            Self::Uniform => generate_draw_uniform(rng),
        }
    }
}

/// Sample a draw from the weighted pool
///
/// # Panics
/// Will not panic - the pool only holds letters A-Z.
pub fn generate_draw_weighted<R: Rng + ?Sized>(rng: &mut R) -> Draw {
    sample_draw(rng, &WEIGHTED_POOL)
}

/// Sample a draw uniformly from A-Z
pub fn generate_draw_uniform<R: Rng + ?Sized>(rng: &mut R) -> Draw {
    const ALPHABET: [char; 26] = [
        'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
        'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    ];
    sample_draw(rng, &ALPHABET)
}

fn sample_draw<R: Rng + ?Sized>(rng: &mut R, pool: &[char]) -> Draw {
    let mut letters = ['A'; DRAW_SIZE];
    for slot in &mut letters {
        *slot = pool[rng.random_range(0..pool.len())];
    }

    Draw::new(letters).expect("pool contains only A-Z")
}
