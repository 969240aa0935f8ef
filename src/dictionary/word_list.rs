//! Dictionary backed by a plain word list

use super::{SpellChecker, language_of};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// In-memory set of words for a single language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from words, lowercasing each entry
    ///
    /// Blank entries and entries with non-alphabetic characters
    /// (possessives like `dog's`, hyphenated forms) are skipped.
    #[must_use]
    pub fn new<I, S>(locale: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|word| {
                let word = word.as_ref().trim().to_lowercase();
                if !word.is_empty() && word.chars().all(char::is_alphabetic) {
                    Some(word)
                } else {
                    None
                }
            })
            .collect();

        Self {
            language: language_of(locale),
            words,
        }
    }

    /// Bundled English dictionary
    #[must_use]
    pub fn embedded_english() -> Self {
        Self::new(super::ENGLISH, crate::wordlists::DICTIONARY)
    }

    /// Load a newline-separated dictionary file, e.g. `/usr/share/dict/words`
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(locale: &str, path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::new(locale, content.lines()))
    }

    /// Number of distinct words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl SpellChecker for WordListDictionary {
    fn is_recognized_word(&self, word: &str, locale: &str) -> bool {
        language_of(locale) == self.language && self.words.contains(&word.to_lowercase())
    }
}
