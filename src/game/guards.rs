//! Submission guards
//!
//! Five predicates evaluated in a fixed order. The first one that fails
//! decides the rejection; later guards are not consulted.

use crate::core::{Rejection, can_spell_from, letter_count};
use crate::dictionary::{ENGLISH, SpellChecker};

/// Words must have more letters than this
pub const SHORT_WORD_LIMIT: usize = 3;

#[inline]
#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    letter_count(word) > SHORT_WORD_LIMIT
}

#[inline]
#[must_use]
pub fn is_not_root(word: &str, root: &str) -> bool {
    word != root
}

#[inline]
#[must_use]
pub fn is_possible(word: &str, root: &str) -> bool {
    can_spell_from(word, root)
}

#[inline]
#[must_use]
pub fn is_real<D: SpellChecker + ?Sized>(word: &str, dictionary: &D) -> bool {
    dictionary.is_recognized_word(word, ENGLISH)
}

#[inline]
#[must_use]
pub fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used == word)
}

/// Run every guard in order against a normalized, non-empty word
///
/// # Errors
///
/// Returns the [`Rejection`] of the first guard that fails.
pub fn check<D: SpellChecker + ?Sized>(
    word: &str,
    root: &str,
    used_words: &[String],
    dictionary: &D,
) -> Result<(), Rejection> {
    if !is_long_enough(word) {
        return Err(Rejection::TooShort);
    }
    if !is_not_root(word, root) {
        return Err(Rejection::SameAsRoot);
    }
    if !is_possible(word, root) {
        return Err(Rejection::NotPossible(root.to_string()));
    }
    if !is_real(word, dictionary) {
        return Err(Rejection::NotRecognized);
    }
    if !is_original(word, used_words) {
        return Err(Rejection::AlreadyUsed);
    }
    Ok(())
}
