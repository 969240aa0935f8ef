//! Reasons a submitted word is turned down
//!
//! Each rejection carries the title and message shown to the player.

use std::fmt;

/// A failed guard, in the order the guards are evaluated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Three letters or fewer
    TooShort,
    /// Identical to the root word
    SameAsRoot,
    /// Needs letters the root word doesn't have (root word attached)
    NotPossible(String),
    /// Not recognized by the dictionary
    NotRecognized,
    /// Already accepted earlier in this game
    AlreadyUsed,
}

impl Rejection {
    /// Alert title
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::TooShort => "A short word",
            Self::SameAsRoot => "This is the original word",
            Self::NotPossible(_) => "Word not possible",
            Self::NotRecognized => "Word not recognized",
            Self::AlreadyUsed => "Word used already",
        }
    }

    /// Alert message body
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::TooShort => "Enter a word longer than three letters".to_string(),
            Self::SameAsRoot => "Enter a word other than the original one".to_string(),
            Self::NotPossible(root) => format!("You can't spell that word from '{root}'!"),
            Self::NotRecognized => "You can't just make them up, you know!".to_string(),
            Self::AlreadyUsed => "Be more original".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl std::error::Error for Rejection {}
