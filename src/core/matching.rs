//! Letter matching stages of the scorer
//!
//! All functions here work on normalized input: `word` is a slice of the
//! normalized word's characters and draw letters are already uppercase.
//! Positions are character indices into the word.

use super::draw::Draw;
use rustc_hash::FxHashMap;

/// Draw letters found in the word, with duplicates, in draw order
///
/// Each draw letter consumes the first still-available occurrence in the
/// word, so a repeated draw letter only counts twice if the word contains it
/// twice. Letters with no available occurrence are skipped.
///
/// # Examples
/// ```
/// use letter_draw::core::{Draw, used_letters};
///
/// let draw: Draw = "HRIR".parse().unwrap();
/// let word: Vec<char> = "HERBIER".chars().collect();
/// assert_eq!(used_letters(&draw, &word), vec!['H', 'R', 'I', 'R']);
///
/// let word: Vec<char> = "HIRE".chars().collect();
/// assert_eq!(used_letters(&draw, &word), vec!['H', 'R', 'I']);
/// ```
#[must_use]
pub fn used_letters(draw: &Draw, word: &[char]) -> Vec<char> {
    let mut consumed = vec![false; word.len()];
    let mut used = Vec::with_capacity(draw.len());

    for &letter in draw.letters() {
        let available = word
            .iter()
            .zip(&consumed)
            .position(|(&ch, &taken)| !taken && ch == letter);

        if let Some(pos) = available {
            consumed[pos] = true;
            used.push(letter);
        }
    }

    used
}

/// Leftmost greedy skeleton of the word
///
/// Scans the word left to right and keeps every position whose letter is
/// still needed by the draw's letter multiset. The result is strictly
/// increasing and at most `DRAW_SIZE` long.
///
/// # Examples
/// ```
/// use letter_draw::core::{Draw, build_skeleton};
///
/// let draw: Draw = "VRAR".parse().unwrap();
/// let word: Vec<char> = "APERCEVRA".chars().collect();
/// assert_eq!(build_skeleton(&draw, &word), vec![0, 3, 6, 7]);
/// ```
#[must_use]
pub fn build_skeleton(draw: &Draw, word: &[char]) -> Vec<usize> {
    let mut remaining: FxHashMap<char, u8> = FxHashMap::default();
    for &letter in draw.letters() {
        *remaining.entry(letter).or_insert(0) += 1;
    }

    let mut skeleton = Vec::with_capacity(draw.len());
    for (i, ch) in word.iter().enumerate() {
        if let Some(count) = remaining.get_mut(ch)
            && *count > 0
        {
            *count -= 1;
            skeleton.push(i);
        }
    }

    skeleton
}

/// Count non-skeleton positions inside the skeleton's span
///
/// Letters before the first or after the last skeleton position are free.
/// Expects strictly increasing indices, as produced by `build_skeleton`.
///
/// # Examples
/// ```
/// use letter_draw::core::count_insertions;
///
/// assert_eq!(count_insertions(&[0, 1, 4, 5]), 2);
/// assert_eq!(count_insertions(&[3]), 0);
/// assert_eq!(count_insertions(&[]), 0);
/// ```
#[must_use]
pub fn count_insertions(skeleton: &[usize]) -> usize {
    match (skeleton.first(), skeleton.last()) {
        (Some(&first), Some(&last)) => (last - first + 1) - skeleton.len(),
        _ => 0,
    }
}

/// Whether the skeleton spells the draw in its original order
///
/// Requires every draw letter to be present in the skeleton: a skeleton
/// shorter than the draw never earns the bonus.
#[must_use]
pub fn has_order_bonus(draw: &Draw, word: &[char], skeleton: &[usize]) -> bool {
    skeleton.len() == draw.len()
        && skeleton
            .iter()
            .zip(draw.letters())
            .all(|(&pos, &letter)| word.get(pos) == Some(&letter))
}
