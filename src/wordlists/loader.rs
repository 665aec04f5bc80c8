//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::{FRENCH_WORDS, SetDictionary};
use crate::error::{GameError, GameResult};
use std::fs;
use std::path::Path;
use tracing::info;

/// Load raw words from a file, one per line
///
/// Blank lines are skipped; everything else is kept as written (normalization
/// happens when the words are put into a dictionary).
///
/// # Errors
///
/// Returns `GameError::WordList` if the file cannot be read, and
/// `GameError::EmptyWordList` if it holds no words.
///
/// # Examples
/// ```no_run
/// use letter_draw::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/french_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> GameResult<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GameError::WordList {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if words.is_empty() {
        return Err(GameError::EmptyWordList(path.to_path_buf()));
    }

    info!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Build a dictionary from a word list file
///
/// # Errors
///
/// Same as [`load_from_file`].
pub fn dictionary_from_file<P: AsRef<Path>>(path: P) -> GameResult<SetDictionary> {
    load_from_file(path).map(SetDictionary::from_words)
}

/// Build a dictionary from the embedded French word list
#[must_use]
pub fn embedded_dictionary() -> SetDictionary {
    SetDictionary::from_words(FRENCH_WORDS)
}
