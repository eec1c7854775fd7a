//! Game intent and outcome types shared between the rules engine and its
//! callers.

mod intent;
mod outcome;

pub use intent::Submission;
pub use outcome::{CreatedSession, SubmitOutcome};
