//! Dictionary membership
//!
//! The game only needs one capability from a dictionary: telling whether a
//! word exists. `SetDictionary` additionally keeps its words in a stable
//! order so the best-word search can iterate them deterministically.

use crate::core::normalize;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Word membership test
///
/// Implementations apply the same normalization as the scorer, so raw and
/// normalized spellings of a word give the same answer.
pub trait Dictionary: Sync {
    /// Check whether a word is in the dictionary
    fn has(&self, word: &str) -> bool;
}

/// Any validator function can act as a dictionary
impl<F> Dictionary for F
where
    F: Fn(&str) -> bool + Sync,
{
    fn has(&self, word: &str) -> bool {
        self(word)
    }
}

/// In-memory dictionary of normalized words
///
/// Words keep the order of their first occurrence in the source list.
#[derive(Debug, Clone, Default)]
pub struct SetDictionary {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl SetDictionary {
    /// Build a dictionary from raw words
    ///
    /// Entries are normalized and trimmed; blank entries and duplicates (after
    /// normalization) are skipped.
    ///
    /// # Examples
    /// ```
    /// use letter_draw::wordlists::{Dictionary, SetDictionary};
    ///
    /// let dict = SetDictionary::from_words(["rame", "BAIGNER", "été", "  "]);
    /// assert_eq!(dict.len(), 3);
    /// assert!(dict.has("Été"));
    /// assert!(dict.has("RAME"));
    /// assert!(!dict.has("RAM"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::default();
        let mut skipped = 0usize;

        for raw in words {
            let normalized = normalize(raw.as_ref());
            let normalized = normalized.trim();

            if normalized.is_empty() || !dict.index.insert(normalized.to_string()) {
                skipped += 1;
                continue;
            }
            dict.words.push(normalized.to_string());
        }

        debug!(words = dict.words.len(), skipped, "built dictionary");
        dict
    }

    /// Words in stable iteration order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for SetDictionary {
    fn has(&self, word: &str) -> bool {
        let normalized = normalize(word);
        let normalized = normalized.trim();
        !normalized.is_empty() && self.index.contains(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case_and_accents() {
        let dict = SetDictionary::from_words(["rame", "BAIGNER", "été"]);

        assert!(dict.has("rame"));
        assert!(dict.has("RAME"));
        assert!(dict.has("Été"));
        assert!(dict.has("ETE"));
        assert!(dict.has("baigner"));

        assert!(!dict.has("RAM"));
        assert!(!dict.has("BANANE"));
    }

    #[test]
    fn skips_blank_entries() {
        let dict = SetDictionary::from_words(["  ", "", "RAME"]);

        assert_eq!(dict.len(), 1);
        assert!(dict.has("RAME"));
        assert!(!dict.has(""));
        assert!(!dict.has("   "));
    }

    #[test]
    fn trims_entries_and_queries() {
        let dict = SetDictionary::from_words([" rame\t"]);
        assert_eq!(dict.words(), &["RAME".to_string()]);
        assert!(dict.has("  rame "));
    }

    #[test]
    fn deduplicates_keeping_first_order() {
        let dict = SetDictionary::from_words(["marche", "pomme", "marché", "Pomme", "arbre"]);
        assert_eq!(dict.words(), &["MARCHE", "POMME", "ARBRE"]);
    }

    #[test]
    fn empty_dictionary() {
        let dict = SetDictionary::from_words(Vec::<String>::new());
        assert!(dict.is_empty());
        assert!(!dict.has("RAME"));
    }

    #[test]
    fn validator_function_is_a_dictionary() {
        fn only_rame(word: &str) -> bool {
            word == "RAME"
        }

        assert!(only_rame.has("RAME"));
        assert!(!only_rame.has("BAIGNER"));
    }

    #[test]
    fn dictionary_as_trait_object() {
        let dict = SetDictionary::from_words(["rame"]);
        let dyn_dict: &dyn Dictionary = &dict;
        assert!(dyn_dict.has("RAME"));
    }
}
