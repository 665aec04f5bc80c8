//! Text normalization
//!
//! Words and draw letters are compared in a canonical form: uppercase with
//! every combining diacritical mark removed, so `été`, `ETE` and `Été` all
//! compare equal.

use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block (U+0300..=U+036F)
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Normalize raw text for comparison
///
/// Uppercases, decomposes (NFD) and strips the combining marks left behind
/// by the decomposition. Whitespace is kept as-is; callers trim when needed.
///
/// # Examples
/// ```
/// use letter_draw::core::normalize;
///
/// assert_eq!(normalize("rame"), "RAME");
/// assert_eq!(normalize("ÉléPhant"), "ELEPHANT");
/// assert_eq!(normalize("ça"), "CA");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_uppercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .collect()
}

/// Normalize a single letter
///
/// Returns `None` unless the letter normalizes to exactly one alphabetic
/// character (`'ß'` becomes `"SS"` and is rejected).
#[must_use]
pub fn normalize_letter(letter: char) -> Option<char> {
    let mut buf = [0u8; 4];
    let normalized = normalize(letter.encode_utf8(&mut buf));
    let mut chars = normalized.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Some(c),
        _ => None,
    }
}
