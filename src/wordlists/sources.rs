//! Word list selection for the command line
//!
//! Each source is either `embedded` or a path to a newline-separated file.

use super::RootWordCatalog;
use crate::dictionary::{ENGLISH, WordListDictionary};
use anyhow::{Context, Result, bail};
use tracing::info;

/// Source name that selects the list compiled into the binary
pub const EMBEDDED: &str = "embedded";

/// Load the root word catalog
///
/// # Errors
///
/// Fails if the file cannot be read. There is no game without root words,
/// so callers abort on this error.
pub fn load_catalog(source: &str) -> Result<RootWordCatalog> {
    let catalog = match source {
        EMBEDDED => RootWordCatalog::embedded(),
        path => RootWordCatalog::load(path)
            .with_context(|| format!("Failed to load root word catalog from '{path}'"))?,
    };
    info!(source, words = catalog.len(), "root word catalog loaded");
    Ok(catalog)
}

/// Load the English dictionary
///
/// # Errors
///
/// Fails if the file cannot be read or holds no usable words.
pub fn load_dictionary(source: &str) -> Result<WordListDictionary> {
    let dictionary = match source {
        EMBEDDED => WordListDictionary::embedded_english(),
        path => WordListDictionary::load(ENGLISH, path)
            .with_context(|| format!("Failed to load dictionary from '{path}'"))?,
    };
    if dictionary.is_empty() {
        bail!("Dictionary '{source}' contains no words");
    }
    info!(source, words = dictionary.len(), "dictionary loaded");
    Ok(dictionary)
}
