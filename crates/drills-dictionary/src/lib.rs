//! In-memory word dictionary mapping words to definitions.
//!
//! [`WordDictionary`] enforces existence preconditions on mutation:
//! [`add`](WordDictionary::add) refuses words that are already present and
//! [`update`](WordDictionary::update) refuses words that are absent. Lookups
//! are exact and case-sensitive.
//!
//! # Construction
//!
//! - **Empty**: [`WordDictionary::new()`] or [`Default`]
//! - **Pre-populated**: collect `(word, definition)` pairs, convert a
//!   `HashMap<String, String>`, or deserialize a table of `word = "definition"`
//!
//! # Example
//!
//! ```
//! use drills_dictionary::{DictionaryError, WordDictionary};
//!
//! let mut dict = WordDictionary::new();
//! dict.add("test", "def").unwrap();
//!
//! assert_eq!(dict.add("test", "other"), Err(DictionaryError::WordExists));
//! assert_eq!(dict.search("test"), Ok("def"));
//! assert_eq!(dict.search("unknown"), Err(DictionaryError::NotFound));
//! ```

mod error;

pub use error::DictionaryError;

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};

/// A single-level mapping from word to definition.
///
/// Owned exclusively by its holder; all mutation goes through `&mut self`.
/// Wrap it in a `Mutex` if more than one caller needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordDictionary {
    entries: HashMap<String, String>,
}

impl WordDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the definition of `word`.
    pub fn search(&self, word: &str) -> Result<&str, DictionaryError> {
        self.entries
            .get(word)
            .map(String::as_str)
            .ok_or(DictionaryError::NotFound)
    }

    /// Insert a new entry.
    ///
    /// Fails with [`DictionaryError::WordExists`] if `word` is already
    /// present; the stored definition is left untouched.
    pub fn add(
        &mut self,
        word: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<(), DictionaryError> {
        match self.entries.entry(word.into()) {
            Entry::Occupied(_) => Err(DictionaryError::WordExists),
            Entry::Vacant(slot) => {
                tracing::debug!(word = %slot.key(), "added word");
                slot.insert(definition.into());
                Ok(())
            }
        }
    }

    /// Replace the definition of an existing entry.
    ///
    /// Fails with [`DictionaryError::WordDoesNotExist`] if `word` is absent;
    /// nothing is inserted in that case.
    pub fn update(
        &mut self,
        word: &str,
        definition: impl Into<String>,
    ) -> Result<(), DictionaryError> {
        let slot = self
            .entries
            .get_mut(word)
            .ok_or(DictionaryError::WordDoesNotExist)?;
        *slot = definition.into();
        tracing::debug!(word, "updated word");
        Ok(())
    }

    /// Remove `word` if present. Deleting an absent word is a no-op.
    pub fn delete(&mut self, word: &str) {
        if self.entries.remove(word).is_some() {
            tracing::debug!(word, "deleted word");
        }
    }

    /// Check if `word` is present.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Return the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All words, sorted.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl From<HashMap<String, String>> for WordDictionary {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<W, D> FromIterator<(W, D)> for WordDictionary
where
    W: Into<String>,
    D: Into<String>,
{
    /// Later pairs overwrite earlier ones with the same word.
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(w, d)| (w.into(), d.into()))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> WordDictionary {
        [("test", "this is just a test")].into_iter().collect()
    }

    #[test]
    fn search_known_word() {
        let dict = seeded();
        assert_eq!(dict.search("test"), Ok("this is just a test"));
    }

    #[test]
    fn search_unknown_word() {
        let dict = seeded();
        assert_eq!(dict.search("unknown"), Err(DictionaryError::NotFound));
    }

    #[test]
    fn search_is_case_sensitive() {
        let dict = seeded();
        assert_eq!(dict.search("Test"), Err(DictionaryError::NotFound));
    }

    #[test]
    fn add_new_word() {
        let mut dict = WordDictionary::new();
        dict.add("test", "this is just a test").unwrap();
        assert_eq!(dict.search("test"), Ok("this is just a test"));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn add_existing_word_keeps_definition() {
        let mut dict = seeded();
        assert_eq!(
            dict.add("test", "new test"),
            Err(DictionaryError::WordExists)
        );
        assert_eq!(dict.search("test"), Ok("this is just a test"));
    }

    #[test]
    fn update_existing_word() {
        let mut dict = seeded();
        dict.update("test", "new define").unwrap();
        assert_eq!(dict.search("test"), Ok("new define"));
    }

    #[test]
    fn update_missing_word_does_not_insert() {
        let mut dict = WordDictionary::new();
        assert_eq!(
            dict.update("test", "this is just a test"),
            Err(DictionaryError::WordDoesNotExist)
        );
        assert!(!dict.contains("test"));
        assert!(dict.is_empty());
    }

    #[test]
    fn delete_removes_word() {
        let mut dict = seeded();
        dict.delete("test");
        assert_eq!(dict.search("test"), Err(DictionaryError::NotFound));
    }

    #[test]
    fn delete_missing_word_is_noop() {
        let mut dict = seeded();
        dict.delete("unknown");
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn words_are_sorted() {
        let dict: WordDictionary = [("pear", "a"), ("apple", "b"), ("fig", "c")]
            .into_iter()
            .collect();
        assert_eq!(dict.words(), vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            DictionaryError::NotFound.to_string(),
            "could not find the word you were looking for"
        );
        assert_eq!(
            DictionaryError::WordExists.to_string(),
            "cannot add word because it already exists"
        );
        assert_eq!(
            DictionaryError::WordDoesNotExist.to_string(),
            "cannot update word because it does not exist"
        );
    }

    #[test]
    fn deserializes_from_table() {
        let dict: WordDictionary =
            toml::from_str("test = \"this is just a test\"\nfig = \"a fruit\"").unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.search("fig"), Ok("a fruit"));
    }
}
