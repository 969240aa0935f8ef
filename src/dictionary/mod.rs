//! Spellcheck oracle
//!
//! The game only needs a yes/no answer for "is this a real word in this
//! locale". Anything that can answer it implements [`SpellChecker`].

mod word_list;

pub use word_list::WordListDictionary;

/// Locale the game session queries the oracle with
pub const ENGLISH: &str = "en";

/// Answers whether a word is correctly spelled in a locale
pub trait SpellChecker {
    /// `true` if `word` is a recognized dictionary word for `locale`
    fn is_recognized_word(&self, word: &str, locale: &str) -> bool;
}

impl<T: SpellChecker + ?Sized> SpellChecker for &T {
    fn is_recognized_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_recognized_word(word, locale)
    }
}

impl<T: SpellChecker + ?Sized> SpellChecker for Box<T> {
    fn is_recognized_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_recognized_word(word, locale)
    }
}

/// Language part of a locale tag (`en_US` and `en-GB` both give `en`)
#[must_use]
pub fn language_of(locale: &str) -> String {
    locale
        .split(['_', '-'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}
