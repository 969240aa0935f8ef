//! Formatting utilities for terminal output

use crate::core::letter_count;

/// Circled letter count shown next to each found word
///
/// Counts 1-20 use the Unicode circled digits; anything longer falls back
/// to a parenthesized number.
#[must_use]
pub fn length_badge(word: &str) -> String {
    circled_number(letter_count(word))
}

#[must_use]
pub fn circled_number(n: usize) -> String {
    match n {
        // U+2460 CIRCLED DIGIT ONE .. U+2473 CIRCLED NUMBER TWENTY
        1..=20 => char::from_u32(0x2460 + n as u32 - 1)
            .map_or_else(|| format!("({n})"), String::from),
        _ => format!("({n})"),
    }
}

/// Score label used by both front-ends
#[must_use]
pub fn score_label(score: usize) -> String {
    format!("Score: {score}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_uses_circled_digits() {
        assert_eq!(length_badge("road"), "④");
        assert_eq!(length_badge("bored"), "⑤");
        assert_eq!(circled_number(1), "①");
        assert_eq!(circled_number(20), "⑳");
    }

    #[test]
    fn badge_falls_back_outside_range() {
        assert_eq!(circled_number(0), "(0)");
        assert_eq!(circled_number(21), "(21)");
    }

    #[test]
    fn score_label_format() {
        assert_eq!(score_label(0), "Score: 0");
        assert_eq!(score_label(12), "Score: 12");
    }
}
