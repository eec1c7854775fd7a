//! Session domain model.
//!
//! This module contains the Session entity that the repository stores and the
//! rules engine reasons about, plus the public `SessionView` snapshot handed
//! out to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of questions a single session may hold.
pub const MAX_QUESTIONS: usize = 20;

/// A yes/no question asked against a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 0-based position of the question within its session
    pub index: usize,
    /// Question text as submitted
    pub text: String,
    /// `None` until the question has been answered
    pub answer: Option<bool>,
}

impl Question {
    /// Creates an unanswered question at `index`.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
            answer: None,
        }
    }
}

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Questions and guesses are accepted.
    Active,
    /// The secret word was guessed. Terminal.
    Answered,
}

/// One 20 Questions game.
///
/// The session holds the secret word, so it deliberately implements neither
/// `Serialize` nor a field-printing `Debug`. Use [`Session::view`] to obtain
/// something that can leave the core.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Unique session identifier
    pub id: String,
    /// The hidden word the player is trying to guess
    pub secret_word: String,
    /// Questions in insertion order; `questions[i].index == i`
    pub questions: Vec<Question>,
    /// Set once by a correct guess, never cleared
    pub answered: bool,
    /// Timestamp when the session was created (RFC 3339)
    pub created_at: String,
    /// Timestamp of the last mutation (RFC 3339)
    pub updated_at: String,
}

impl Session {
    /// Creates a fresh, active session with no questions.
    pub fn new(id: impl Into<String>, secret_word: impl Into<String>) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: id.into(),
            secret_word: secret_word.into(),
            questions: Vec::new(),
            answered: false,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.answered {
            SessionState::Answered
        } else {
            SessionState::Active
        }
    }

    /// Number of questions that may still be appended.
    pub fn questions_remaining(&self) -> usize {
        MAX_QUESTIONS.saturating_sub(self.questions.len())
    }

    pub fn is_full(&self) -> bool {
        self.questions.len() >= MAX_QUESTIONS
    }

    /// Exact, case-sensitive comparison against the secret word.
    pub fn matches_secret(&self, guess: &str) -> bool {
        self.secret_word == guess
    }

    /// Builds the externally observable snapshot of this session.
    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id.clone(),
            questions: self.questions.clone(),
            answered: self.answered,
            state: self.state(),
            questions_remaining: self.questions_remaining(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("secret_word", &"<redacted>")
            .field("questions", &self.questions)
            .field("answered", &self.answered)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Public snapshot of a session. Never carries the secret word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub id: String,
    pub questions: Vec<Question>,
    pub answered: bool,
    pub state: SessionState,
    pub questions_remaining: usize,
    pub created_at: String,
    pub updated_at: String,
}
