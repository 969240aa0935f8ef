//! Catalog of root words
//!
//! Loaded once at startup and never modified. A game picks its root word
//! uniformly at random from the catalog.

use super::loader::{load_from_file, words_from_slice};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::io;
use std::path::Path;

/// Root word used when the catalog has no entries to choose from
pub const FALLBACK_ROOT_WORD: &str = "billions";

/// Immutable ordered list of candidate root words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootWordCatalog {
    words: Vec<String>,
}

impl RootWordCatalog {
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Catalog bundled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(super::ROOT_WORDS)
    }

    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::new(words_from_slice(slice))
    }

    /// Load a newline-separated catalog file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file is missing or unreadable. Callers
    /// treat this as fatal: the game cannot start without root words.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::new)
    }

    /// Pick a root word uniformly at random
    ///
    /// Falls back to [`FALLBACK_ROOT_WORD`] when the catalog is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.words
            .choose(rng)
            .map_or(FALLBACK_ROOT_WORD, String::as_str)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
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
