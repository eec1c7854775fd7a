//! Outcomes decided by the rules engine.

use serde::{Deserialize, Serialize};

/// Result of a successful create-session intent. Carries no secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedSession {
    pub id: String,
}

/// Result of a question-or-guess submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum SubmitOutcome {
    /// The question was appended at `index`.
    QuestionRecorded { index: usize },
    /// The guess matched; the session is now answered.
    Correct,
    /// The guess did not match. Nothing was recorded.
    Incorrect,
    /// The session was already answered; nothing was recorded.
    SessionClosed,
}

impl SubmitOutcome {
    /// True only for a correct guess.
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Index of the recorded question, if one was recorded.
    pub fn question_index(&self) -> Option<usize> {
        match self {
            Self::QuestionRecorded { index } => Some(*index),
            _ => None,
        }
    }
}
