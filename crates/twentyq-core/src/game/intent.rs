//! Client intents accepted by the rules engine.

use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};

/// A validated question-or-guess submission.
///
/// Exactly one of the two inputs may be non-empty. [`Submission::from_parts`]
/// checks this for raw fields; values built directly or deserialized are
/// checked with [`Submission::validate`] before the rules engine acts on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "text")]
pub enum Submission {
    Question(String),
    Guess(String),
}

impl Submission {
    /// Validates raw `question` / `guess` fields.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIntent` when both fields are non-empty or both are
    /// empty.
    pub fn from_parts(question: &str, guess: &str) -> Result<Self> {
        match (question.is_empty(), guess.is_empty()) {
            (false, true) => Ok(Self::Question(question.to_string())),
            (true, false) => Ok(Self::Guess(guess.to_string())),
            (false, false) => Err(GameError::invalid_intent(
                "guess and question can't both have values",
            )),
            (true, true) => Err(GameError::invalid_intent(
                "either a question or a guess is required",
            )),
        }
    }

    /// Rejects a submission whose text is empty.
    ///
    /// # Errors
    ///
    /// Returns `InvalidIntent` for an empty question or guess.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Question(text) if text.is_empty() => Err(GameError::invalid_intent(
                "either a question or a guess is required",
            )),
            Self::Guess(text) if text.is_empty() => Err(GameError::invalid_intent(
                "either a question or a guess is required",
            )),
            _ => Ok(()),
        }
    }

    pub fn is_guess(&self) -> bool {
        matches!(self, Self::Guess(_))
    }
}
