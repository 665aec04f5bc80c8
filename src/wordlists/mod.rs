//! Word lists and dictionaries
//!
//! Provides the embedded French word list, file loading, and the dictionary
//! capability used to validate words.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::{Dictionary, SetDictionary};
pub use embedded::{FRENCH_WORDS, FRENCH_WORDS_COUNT};
