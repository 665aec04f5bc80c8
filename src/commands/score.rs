//! Word scoring command
//!
//! Plays a single word against a draw given on the command line.

use crate::core::Draw;
use crate::error::GameResult;
use crate::game::{RoundResult, evaluate_round};
use crate::wordlists::Dictionary;

/// Score a word against a draw written as text (`"RAME"`, `"R A M E"`)
///
/// # Errors
///
/// Returns an error if the draw is not exactly 4 letters. An empty or unknown
/// word is not an error: it yields an invalid `RoundResult`.
pub fn score_command<D: Dictionary + ?Sized>(
    draw: &str,
    word: &str,
    dictionary: &D,
) -> GameResult<RoundResult> {
    let draw: Draw = draw.parse()?;
    Ok(evaluate_round(&draw, word, dictionary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::game::InvalidReason;
    use crate::wordlists::SetDictionary;

    #[test]
    fn scores_known_word() {
        let dict = SetDictionary::from_words(["torpille"]);
        let result = score_command("t r p l", "torpille", &dict).unwrap();

        assert!(result.is_valid());
        assert_eq!(result.total(), 13);
    }

    #[test]
    fn unknown_word_is_not_an_error() {
        let dict = SetDictionary::from_words(["torpille"]);
        let result = score_command("TRPL", "tortue", &dict).unwrap();

        assert_eq!(result.invalid_reason(), Some(InvalidReason::NotInDictionary));
    }

    #[test]
    fn bad_draw_is_an_error() {
        let dict = SetDictionary::from_words(["rame"]);
        let result = score_command("RAMES", "rame", &dict);

        assert!(matches!(result, Err(GameError::Draw(_))));
    }
}
