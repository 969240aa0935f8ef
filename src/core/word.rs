//! Word normalization and letter arithmetic
//!
//! Submissions are compared in normalized form: lowercase, surrounding
//! whitespace removed. Lengths are counted in characters, not bytes.

/// Normalize raw player input
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Bored\n"), "bored");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Number of letters in a word
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Check whether `word` can be spelled from the letters of `root`
///
/// Each letter of `root` may be used at most as many times as it appears.
/// Letters of `word` are consumed in order from a copy of `root`'s letters;
/// the check fails at the first letter with no remaining occurrence.
///
/// # Examples
/// ```
/// use word_scramble::core::can_spell_from;
///
/// assert!(can_spell_from("bored", "keyboard"));
/// assert!(!can_spell_from("boob", "keyboard")); // one 'b', one 'o'
/// ```
#[must_use]
pub fn can_spell_from(word: &str, root: &str) -> bool {
    let mut available: Vec<char> = root.chars().collect();

    for letter in word.chars() {
        match available.iter().position(|&c| c == letter) {
            Some(index) => {
                available.remove(index);
            }
            None => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("BORED"), "bored");
        assert_eq!(normalize("\t Board \n"), "board");
        assert_eq!(normalize("KeyBoard"), "keyboard");
    }

    #[test]
    fn normalize_whitespace_only_is_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\n "), "");
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize(" two words "), "two words");
    }

    #[test]
    fn letter_count_counts_chars() {
        assert_eq!(letter_count("bored"), 5);
        assert_eq!(letter_count(""), 0);
        assert_eq!(letter_count("café"), 4);
    }

    #[test]
    fn spell_from_subset() {
        assert!(can_spell_from("bored", "keyboard"));
        assert!(can_spell_from("board", "keyboard"));
        assert!(can_spell_from("dory", "keyboard"));
        assert!(can_spell_from("keyboard", "keyboard"));
    }

    #[test]
    fn spell_from_rejects_missing_letter() {
        assert!(!can_spell_from("boxed", "keyboard"));
        assert!(!can_spell_from("zz", "keyboard"));
    }

    #[test]
    fn spell_from_respects_multiplicity() {
        // "keyboard" has one 'o'
        assert!(!can_spell_from("brood", "keyboard"));
        // "billions" has two 'l' and two 'i'
        assert!(can_spell_from("bill", "billions"));
        assert!(!can_spell_from("lilli", "billions"));
    }

    #[test]
    fn spell_from_empty_word() {
        assert!(can_spell_from("", "keyboard"));
        assert!(!can_spell_from("a", ""));
    }
}
