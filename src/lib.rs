//! Word Scramble
//!
//! A word game: spell as many words as you can from the letters of a root
//! word. Every submission must be longer than three letters, differ from the
//! root, use only the root's letters, be a real English word and not have
//! been found already.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::{ENGLISH, WordListDictionary};
//! use word_scramble::game::{GameSession, SubmitOutcome};
//! use word_scramble::wordlists::RootWordCatalog;
//!
//! let catalog = RootWordCatalog::embedded();
//! let dictionary = WordListDictionary::new(ENGLISH, ["bored"]);
//! let mut session = GameSession::with_root_word(&catalog, dictionary, "keyboard");
//!
//! assert_eq!(
//!     session.submit_word("Bored"),
//!     Ok(SubmitOutcome::Accepted("bored".to_string()))
//! );
//! assert_eq!(session.score(), 1);
//! ```

// Core domain types
pub mod core;

// Spellcheck oracle
pub mod dictionary;

// Game rules and session state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
