use thiserror::Error;

/// Errors reported by [`WordDictionary`](crate::WordDictionary) operations.
///
/// Each variant is returned directly to the caller; a failed operation never
/// mutates the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DictionaryError {
    /// The word is not in the dictionary.
    #[error("could not find the word you were looking for")]
    NotFound,
    /// `add` was called for a word that is already present.
    #[error("cannot add word because it already exists")]
    WordExists,
    /// `update` was called for a word that is absent.
    #[error("cannot update word because it does not exist")]
    WordDoesNotExist,
}
