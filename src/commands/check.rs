//! Batch word checking
//!
//! Runs a list of words through the guards against a fixed root word, the
//! same way they would be played one after another in a single game.

use crate::core::Rejection;
use crate::dictionary::SpellChecker;
use crate::game::{GameSession, SubmitOutcome};
use crate::wordlists::RootWordCatalog;

/// Verdict for one submitted word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
    Ignored,
}

/// One line of a check report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckEntry {
    pub input: String,
    pub verdict: Verdict,
}

/// Result of checking a batch of words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub root_word: String,
    pub entries: Vec<CheckEntry>,
    pub used_words: Vec<String>,
}

impl CheckReport {
    #[must_use]
    pub fn score(&self) -> usize {
        self.used_words.len()
    }

    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.verdict, Verdict::Rejected(_)))
            .count()
    }
}

/// Submit `words` in order against `root_word`
///
/// # Errors
///
/// Returns an error if the root word is blank.
pub fn check_words<D: SpellChecker>(
    root_word: &str,
    words: &[String],
    catalog: &RootWordCatalog,
    dictionary: D,
) -> Result<CheckReport, String> {
    let mut session = GameSession::with_root_word(catalog, dictionary, root_word);
    if session.root_word().is_empty() {
        return Err("Root word must not be empty".to_string());
    }

    let entries = words
        .iter()
        .map(|input| {
            let verdict = match session.submit_word(input) {
                Ok(SubmitOutcome::Accepted(_)) => Verdict::Accepted,
                Ok(SubmitOutcome::Ignored) => Verdict::Ignored,
                Err(rejection) => Verdict::Rejected(rejection),
            };
            CheckEntry {
                input: input.clone(),
                verdict,
            }
        })
        .collect();

    Ok(CheckReport {
        root_word: session.root_word().to_string(),
        entries,
        used_words: session.used_words().to_vec(),
    })
}
