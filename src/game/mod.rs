//! Game rules and session state

pub mod guards;
mod session;

pub use session::{GameSession, SubmitOutcome};
