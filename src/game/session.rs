//! Game session state
//!
//! Holds everything one game needs: the root word, the words found so far,
//! the text being typed and the last rejection. Front-ends mutate it only
//! through the operations here and re-render afterwards.

use super::guards;
use crate::core::{Rejection, normalize};
use crate::dictionary::SpellChecker;
use crate::wordlists::RootWordCatalog;
use rand::Rng;
use tracing::{debug, info};

/// Result of a submission that passed validation or was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Word passed every guard and was added to the front of the list
    Accepted(String),
    /// Input was empty after normalization; nothing changed
    Ignored,
}

/// A single game against one root word
pub struct GameSession<'a, D: SpellChecker> {
    catalog: &'a RootWordCatalog,
    dictionary: D,
    root_word: String,
    used_words: Vec<String>,
    current_input: String,
    last_error: Option<Rejection>,
}

impl<'a, D: SpellChecker> GameSession<'a, D> {
    /// Create a session and start the first game
    #[must_use]
    pub fn new(catalog: &'a RootWordCatalog, dictionary: D) -> Self {
        let mut session = Self::with_root_word(catalog, dictionary, "");
        session.start_game();
        session
    }

    /// Create a session with a fixed root word
    ///
    /// Restarting still draws from `catalog`.
    #[must_use]
    pub fn with_root_word(
        catalog: &'a RootWordCatalog,
        dictionary: D,
        root_word: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            dictionary,
            root_word: normalize(&root_word.into()),
            used_words: Vec::new(),
            current_input: String::new(),
            last_error: None,
        }
    }

    /// Start a new game with a random root word
    pub fn start_game(&mut self) {
        self.start_game_with(&mut rand::rng());
    }

    /// Start a new game, drawing the root word from `rng`
    pub fn start_game_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.used_words.clear();
        self.current_input.clear();
        self.last_error = None;
        self.root_word = self.catalog.choose(rng).to_string();
        info!(root_word = %self.root_word, "new game");
    }

    /// Throw away the current game and start another
    pub fn restart(&mut self) {
        info!(score = self.score(), "restarting");
        self.start_game();
    }

    /// Validate and record a word
    ///
    /// Input is lowercased and trimmed first; empty input is ignored
    /// without touching any state.
    ///
    /// # Errors
    ///
    /// Returns the first failing guard's [`Rejection`]. The rejection is
    /// also kept as [`last_error`](Self::last_error); nothing else changes.
    pub fn submit_word(&mut self, raw: &str) -> Result<SubmitOutcome, Rejection> {
        let word = normalize(raw);
        if word.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        if let Err(rejection) =
            guards::check(&word, &self.root_word, &self.used_words, &self.dictionary)
        {
            debug!(%word, reason = rejection.title(), "word rejected");
            self.last_error = Some(rejection.clone());
            return Err(rejection);
        }

        info!(%word, score = self.used_words.len() + 1, "word accepted");
        self.used_words.insert(0, word.clone());
        self.current_input.clear();
        self.last_error = None;
        Ok(SubmitOutcome::Accepted(word))
    }

    /// Submit whatever is in the input field
    ///
    /// # Errors
    ///
    /// Same as [`submit_word`](Self::submit_word).
    pub fn submit_current_input(&mut self) -> Result<SubmitOutcome, Rejection> {
        let input = self.current_input.clone();
        self.submit_word(&input)
    }

    /// Close the error alert
    pub fn dismiss_error(&mut self) {
        self.last_error = None;
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.used_words.len()
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn current_input_mut(&mut self) -> &mut String {
        &mut self.current_input
    }

    #[must_use]
    pub const fn last_error(&self) -> Option<&Rejection> {
        self.last_error.as_ref()
    }
}
