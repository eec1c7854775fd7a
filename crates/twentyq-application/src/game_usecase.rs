//! Game use case implementation.
//!
//! `GameUseCase` is the rules engine of the 20 Questions game. It turns one
//! client intent into repository calls and decides the outcome.

use std::sync::Arc;
use twentyq_core::error::{GameError, Result};
use twentyq_core::game::{CreatedSession, SubmitOutcome, Submission};
use twentyq_core::session::{SessionIdGenerator, SessionRepository, SessionView};
use twentyq_infrastructure::{InMemorySessionRepository, UuidSessionIdGenerator};

/// Use case for playing 20 Questions sessions.
///
/// # Responsibilities
///
/// - Creating sessions with freshly generated identifiers
/// - Validating question-or-guess submissions before touching storage
/// - Resolving guesses and closing sessions on a correct guess
/// - Recording answers to earlier questions
///
/// # State machine
///
/// A session starts `Active` and becomes `Answered` only through a correct
/// guess. The repository does not block questions on answered sessions; the
/// pre-check in [`GameUseCase::submit`] does.
///
/// # Thread Safety
///
/// All collaborators are shared through `Arc`, so one use case can serve
/// many concurrent callers. Per-session consistency is the repository's job.
pub struct GameUseCase {
    /// Storage for session data
    session_repository: Arc<dyn SessionRepository>,
    /// Source of new session identifiers
    id_generator: Arc<dyn SessionIdGenerator>,
}

impl GameUseCase {
    /// Creates a new `GameUseCase` instance.
    ///
    /// # Arguments
    ///
    /// * `session_repository` - Repository for session storage
    /// * `id_generator` - Generator for new session identifiers
    pub fn new(
        session_repository: Arc<dyn SessionRepository>,
        id_generator: Arc<dyn SessionIdGenerator>,
    ) -> Self {
        Self {
            session_repository,
            id_generator,
        }
    }

    /// Creates a use case backed by the in-memory repository and UUID ids.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemorySessionRepository::new()),
            Arc::new(UuidSessionIdGenerator),
        )
    }

    /// Starts a new session around `secret_word`.
    ///
    /// # Errors
    ///
    /// - `InvalidIntent` if the secret word is blank.
    /// - `SessionAlreadyExists` if the generator repeated an id.
    #[tracing::instrument(skip_all)]
    pub async fn create_session(&self, secret_word: &str) -> Result<CreatedSession> {
        if secret_word.trim().is_empty() {
            tracing::warn!("Rejected create-session with blank secret word");
            return Err(GameError::invalid_intent("secret word must not be blank"));
        }

        let id = self.id_generator.generate();
        self.session_repository
            .create_session(&id, secret_word)
            .await?;

        tracing::info!(session_id = %id, "Session created");
        Ok(CreatedSession { id })
    }

    /// Returns the public view of a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if no session has this id.
    pub async fn get_session(&self, session_id: &str) -> Result<SessionView> {
        let session = self.session_repository.get_session(session_id).await?;
        Ok(session.view())
    }

    /// Submits raw question / guess fields, as a transport would decode them.
    ///
    /// Exactly one of the two must be non-empty; anything else is rejected
    /// with `InvalidIntent` before the repository is consulted.
    pub async fn submit_parts(
        &self,
        session_id: &str,
        question: &str,
        guess: &str,
    ) -> Result<SubmitOutcome> {
        let submission = Submission::from_parts(question, guess).inspect_err(|e| {
            tracing::warn!(session_id = %session_id, error = %e, "Rejected submission");
        })?;
        self.submit(session_id, submission).await
    }

    /// Submits a question or a guess.
    ///
    /// # Errors
    ///
    /// - `InvalidIntent` if the question or guess text is empty; checked
    ///   before the repository is consulted.
    /// - `SessionNotFound` if no session has this id.
    /// - `NoMoreQuestions` if a question is submitted to a full session.
    #[tracing::instrument(skip(self, submission), fields(guess = submission.is_guess()))]
    pub async fn submit(&self, session_id: &str, submission: Submission) -> Result<SubmitOutcome> {
        submission.validate().inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected submission");
        })?;

        let session = self.session_repository.get_session(session_id).await?;

        if session.answered {
            tracing::warn!("Rejected submission to answered session");
            return Ok(SubmitOutcome::SessionClosed);
        }

        match submission {
            Submission::Guess(guess) => {
                if session.matches_secret(&guess) {
                    self.session_repository
                        .update_session(session_id, true)
                        .await?;
                    tracing::info!("Correct guess, session answered");
                    Ok(SubmitOutcome::Correct)
                } else {
                    tracing::debug!("Incorrect guess");
                    Ok(SubmitOutcome::Incorrect)
                }
            }
            Submission::Question(text) => {
                let index = self
                    .session_repository
                    .save_question(session_id, &text)
                    .await?;
                Ok(SubmitOutcome::QuestionRecorded { index })
            }
        }
    }

    /// Records the answer to a previously asked question.
    ///
    /// No rule checks apply: answering works on answered sessions too, and a
    /// second answer overwrites the first.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if no session has this id.
    /// - `QuestionNotFound` if `index` is not a question of this session.
    #[tracing::instrument(skip(self))]
    pub async fn record_answer(&self, session_id: &str, index: usize, answer: bool) -> Result<()> {
        self.session_repository
            .save_answer(session_id, index, answer)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sequential_ids() -> Arc<dyn SessionIdGenerator> {
        let counter = AtomicUsize::new(0);
        Arc::new(move || format!("session-{}", counter.fetch_add(1, Ordering::SeqCst)))
    }

    fn create_usecase() -> (GameUseCase, Arc<InMemorySessionRepository>) {
        let repo = Arc::new(InMemorySessionRepository::new());
        let usecase = GameUseCase::new(repo.clone(), sequential_ids());
        (usecase, repo)
    }

    #[tokio::test]
    async fn test_create_session_uses_generator() {
        let (usecase, repo) = create_usecase();

        let first = usecase.create_session("word").await.unwrap();
        let second = usecase.create_session("word").await.unwrap();

        assert_eq!(first.id, "session-0");
        assert_eq!(second.id, "session-1");
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn test_create_session_rejects_blank_word() {
        let (usecase, repo) = create_usecase();

        let err = usecase.create_session("   ").await.unwrap_err();
        assert!(err.is_invalid_intent());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_repeated_id_is_rejected() {
        let repo = Arc::new(InMemorySessionRepository::new());
        let usecase = GameUseCase::new(repo, Arc::new(|| "fixed".to_string()));

        usecase.create_session("word").await.unwrap();
        let err = usecase.create_session("other").await.unwrap_err();
        assert_eq!(err, GameError::session_already_exists("fixed"));
    }

    #[tokio::test]
    async fn test_invalid_submission_does_not_touch_repository() {
        let (usecase, _repo) = create_usecase();

        // Unknown session: validation must fail first, not SessionNotFound
        let err = usecase
            .submit_parts("missing", "Is it red?", "apple")
            .await
            .unwrap_err();
        assert!(err.is_invalid_intent());

        let err = usecase.submit_parts("missing", "", "").await.unwrap_err();
        assert!(err.is_invalid_intent());
    }

    #[tokio::test]
    async fn test_submit_to_unknown_session() {
        let (usecase, _repo) = create_usecase();

        let err = usecase
            .submit("missing", Submission::Question("q".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err, GameError::session_not_found("missing"));
    }

    #[tokio::test]
    async fn test_guess_is_case_sensitive() {
        let (usecase, repo) = create_usecase();
        let created = usecase.create_session("Word").await.unwrap();

        let outcome = usecase.submit_parts(&created.id, "", "word").await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Incorrect);
        assert!(!repo.get_session(&created.id).await.unwrap().answered);
    }
}
