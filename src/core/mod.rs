//! Core domain types for the word scramble game
//!
//! Pure helpers with no I/O: input normalization, the letter-multiset check
//! and the rejection type surfaced to the player.

mod rejection;
mod word;

pub use rejection::Rejection;
pub use word::{can_spell_from, letter_count, normalize};
