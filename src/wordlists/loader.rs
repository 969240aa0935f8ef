//! Word list loading utilities
//!
//! Reads newline-separated word lists from disk or from embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Split newline-separated text into normalized words
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let words = words_from_slice(ROOT_WORDS);
/// assert_eq!(words.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_trims_and_lowercases() {
        let words = words_from_lines("Keyboard\n  billions  \r\nAIRPLANE");
        assert_eq!(words, vec!["keyboard", "billions", "airplane"]);
    }

    #[test]
    fn words_from_lines_skips_blank_lines() {
        let words = words_from_lines("keyboard\n\n   \nbillions\n");
        assert_eq!(words, vec!["keyboard", "billions"]);
    }

    #[test]
    fn words_from_lines_empty() {
        assert!(words_from_lines("").is_empty());
        assert!(words_from_lines("\n\n").is_empty());
    }

    #[test]
    fn words_from_slice_keeps_order() {
        let words = words_from_slice(&["keyboard", "billions"]);
        assert_eq!(words, vec!["keyboard", "billions"]);
    }

    #[test]
    fn load_missing_file_errors() {
        assert!(load_from_file("/nonexistent/start.txt").is_err());
    }
}
