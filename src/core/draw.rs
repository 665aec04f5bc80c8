//! Letter draw representation
//!
//! A draw is the ordered set of 4 letters a round is played with. Letters may
//! repeat, and their order matters for the order bonus.

use super::normalize::normalize_letter;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of letters in a draw
pub const DRAW_SIZE: usize = 4;

/// An ordered draw of 4 normalized letters
///
/// Letters are stored uppercase without diacritics, so a draw built from
/// `['é', 't', 'a', 'i']` is `E T A I`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Draw {
    letters: [char; DRAW_SIZE],
}

/// Error type for invalid draws
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("draw must contain exactly 4 letters, got {0}")]
    InvalidLength(usize),
    #[error("'{0}' is not a single letter")]
    InvalidLetter(char),
}

impl Draw {
    /// Create a draw from 4 letters
    ///
    /// # Errors
    /// Returns `DrawError::InvalidLetter` if a letter does not normalize to a
    /// single alphabetic character.
    ///
    /// # Examples
    /// ```
    /// use letter_draw::core::Draw;
    ///
    /// let draw = Draw::new(['r', 'a', 'm', 'é']).unwrap();
    /// assert_eq!(draw.letters(), &['R', 'A', 'M', 'E']);
    ///
    /// assert!(Draw::new(['r', 'a', 'm', '1']).is_err());
    /// ```
    pub fn new(letters: [char; DRAW_SIZE]) -> Result<Self, DrawError> {
        let mut normalized = [' '; DRAW_SIZE];
        for (slot, &letter) in normalized.iter_mut().zip(&letters) {
            *slot = normalize_letter(letter).ok_or(DrawError::InvalidLetter(letter))?;
        }

        Ok(Self {
            letters: normalized,
        })
    }

    /// Get the letters in draw order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; DRAW_SIZE] {
        &self.letters
    }

    /// Number of letters (always `DRAW_SIZE`)
    #[inline]
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn len(&self) -> usize {
        DRAW_SIZE
    }

    /// A draw is never empty; provided for API symmetry with `len`
    #[inline]
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl FromStr for Draw {
    type Err = DrawError;

    /// Parse a draw like `"RAME"`, `"r a m e"` or `"R,A,M,E"`
    ///
    /// Whitespace, commas and hyphens are treated as separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, ',' | '-'))
            .collect();

        let letters: [char; DRAW_SIZE] = letters
            .as_slice()
            .try_into()
            .map_err(|_| DrawError::InvalidLength(letters.len()))?;

        Self::new(letters)
    }
}

impl fmt::Display for Draw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
