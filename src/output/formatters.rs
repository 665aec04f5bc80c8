//! Formatting utilities for terminal output

use crate::core::{ORDER_BONUS_POINTS, POINTS_PER_LETTER, ScorePart, DRAW_SIZE};

/// Highest total a word can reach: every letter, in order, no insertions
pub const MAX_TOTAL: i32 = DRAW_SIZE as i32 * POINTS_PER_LETTER + ORDER_BONUS_POINTS;

/// Marker line to print under a word
///
/// `^` marks skeleton letters, `+` marks insertions between them, and
/// letters outside the skeleton's span are left blank.
#[must_use]
pub fn skeleton_marker(word: &str, skeleton: &[usize]) -> String {
    let (Some(&first), Some(&last)) = (skeleton.first(), skeleton.last()) else {
        return String::new();
    };

    let marker: String = (0..word.chars().count())
        .map(|i| {
            if skeleton.contains(&i) {
                '^'
            } else if (first..=last).contains(&i) {
                '+'
            } else {
                ' '
            }
        })
        .collect();

    marker.trim_end().to_string()
}

/// Format a score breakdown as `base +12 | order_bonus +3 | insertions -2`
#[must_use]
pub fn format_parts(parts: &[ScorePart]) -> String {
    parts
        .iter()
        .map(|part| format!("{} {:+}", part.label, part.value))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Join letters with single spaces
#[must_use]
pub fn format_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a score total as a bar scaled to the maximum total
#[must_use]
pub fn score_bar(total: i32, width: usize) -> String {
    create_progress_bar(f64::from(total), f64::from(MAX_TOTAL), width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Draw, score_word};

    #[test]
    fn max_total_is_fifteen() {
        assert_eq!(MAX_TOTAL, 15);
    }

    #[test]
    fn marker_with_insertions() {
        assert_eq!(skeleton_marker("BAIGNER", &[0, 1, 4, 5]), "^^++^^");
        assert_eq!(skeleton_marker("HERBIER", &[0, 2, 4, 6]), "^+^+^+^");
    }

    #[test]
    fn marker_leaves_prefix_blank() {
        assert_eq!(skeleton_marker("APERCEVRA", &[3, 6]), "   ^++^");
    }

    #[test]
    fn marker_empty_skeleton() {
        assert_eq!(skeleton_marker("OUF", &[]), "");
    }

    #[test]
    fn parts_format() {
        let draw: Draw = "BANE".parse().unwrap();
        let result = score_word(&draw, "BAIGNER");
        assert_eq!(
            format_parts(&result.parts),
            "base +12 | order_bonus +3 | insertions -2"
        );
    }

    #[test]
    fn parts_format_zero() {
        let draw: Draw = "RAME".parse().unwrap();
        let result = score_word(&draw, "OUF");
        assert_eq!(
            format_parts(&result.parts),
            "base +0 | order_bonus +0 | insertions +0"
        );
    }

    #[test]
    fn letters_format() {
        assert_eq!(format_letters(&['R', 'A', 'M', 'E']), "R A M E");
        assert_eq!(format_letters(&[]), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn score_bar_clamps_negative() {
        assert_eq!(score_bar(-4, 5), "░░░░░");
        assert_eq!(score_bar(15, 5), "█████");
    }
}
