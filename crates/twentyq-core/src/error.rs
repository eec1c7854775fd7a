//! Error types for the twentyq game core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The shared error type for repository and rules-engine operations.
///
/// Every variant is a request-shaped condition the caller can recover from.
/// Translating a variant into a user-facing response is left to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    /// No session is stored under the given id.
    #[error("Session not found: '{id}'")]
    SessionNotFound { id: String },

    /// The index does not address a question stored in the session.
    #[error("Question not found: index {index} in session '{session_id}'")]
    QuestionNotFound { session_id: String, index: usize },

    /// The session already holds the maximum number of questions.
    #[error("20 questions have been asked already in session '{session_id}'")]
    NoMoreQuestions { session_id: String },

    /// The intent is malformed (e.g. both a question and a guess supplied).
    #[error("Invalid intent: {0}")]
    InvalidIntent(String),

    /// A session with this id already exists.
    #[error("Session already exists: '{id}'")]
    SessionAlreadyExists { id: String },
}

impl GameError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a SessionNotFound error
    pub fn session_not_found(id: impl Into<String>) -> Self {
        Self::SessionNotFound { id: id.into() }
    }

    /// Creates a QuestionNotFound error
    pub fn question_not_found(session_id: impl Into<String>, index: usize) -> Self {
        Self::QuestionNotFound {
            session_id: session_id.into(),
            index,
        }
    }

    /// Creates a NoMoreQuestions error
    pub fn no_more_questions(session_id: impl Into<String>) -> Self {
        Self::NoMoreQuestions {
            session_id: session_id.into(),
        }
    }

    /// Creates an InvalidIntent error
    pub fn invalid_intent(message: impl Into<String>) -> Self {
        Self::InvalidIntent(message.into())
    }

    /// Creates a SessionAlreadyExists error
    pub fn session_already_exists(id: impl Into<String>) -> Self {
        Self::SessionAlreadyExists { id: id.into() }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error means the addressed session or question is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SessionNotFound { .. } | Self::QuestionNotFound { .. }
        )
    }

    /// Check if this is a NoMoreQuestions error
    pub fn is_no_more_questions(&self) -> bool {
        matches!(self, Self::NoMoreQuestions { .. })
    }

    /// Check if this is an InvalidIntent error
    pub fn is_invalid_intent(&self) -> bool {
        matches!(self, Self::InvalidIntent(_))
    }
}

/// A type alias for `Result<T, GameError>`.
pub type Result<T> = std::result::Result<T, GameError>;
