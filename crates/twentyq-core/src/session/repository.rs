//! Session repository trait.
//!
//! Defines the storage contract the rules engine relies on.

use super::model::Session;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for 20 Questions sessions.
///
/// The repository owns session storage and enforces structural limits only:
/// existence checks, id uniqueness and the question cap. It knows nothing
/// about guesses or the answered pre-check.
///
/// # Implementation Notes
///
/// Implementations must make all operations on one session linearizable:
/// concurrent `save_question` calls must never push a session past
/// [`MAX_QUESTIONS`](super::MAX_QUESTIONS), and mutations must never be
/// observed half-applied. Returned sessions are owned snapshots.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Inserts a new active session with no questions.
    ///
    /// # Errors
    ///
    /// - `SessionAlreadyExists` if `id` is already in use; the stored
    ///   session is left untouched.
    async fn create_session(&self, id: &str, secret_word: &str) -> Result<()>;

    /// Returns a snapshot of the session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if no session has this id.
    async fn get_session(&self, id: &str) -> Result<Session>;

    /// Sets the session's `answered` flag. An answered session stays answered.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if no session has this id.
    async fn update_session(&self, id: &str, answered: bool) -> Result<()>;

    /// Appends an unanswered question and returns its index.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if no session has this id.
    /// - `NoMoreQuestions` if the session already holds the maximum.
    async fn save_question(&self, id: &str, text: &str) -> Result<usize>;

    /// Sets the answer of the question at `index`, overwriting any previous
    /// answer.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if no session has this id.
    /// - `QuestionNotFound` if `index` is not below this session's question
    ///   count.
    async fn save_answer(&self, id: &str, index: usize, answer: bool) -> Result<()>;
}
