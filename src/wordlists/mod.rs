//! Word lists for the word scramble game
//!
//! Provides the embedded root word catalog and English dictionary, plus
//! loaders for replacing either from a file.

mod catalog;
mod embedded;
pub mod loader;
pub mod sources;

pub use catalog::{FALLBACK_ROOT_WORD, RootWordCatalog};
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, ROOT_WORDS, ROOT_WORDS_COUNT};
