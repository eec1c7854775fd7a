//! In-memory SessionRepository implementation.

use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use twentyq_core::error::{GameError, Result};
use twentyq_core::session::{Question, Session, SessionRepository};

/// Process-local session store.
///
/// Each session sits behind its own mutex, so operations on one session are
/// serialized while different sessions proceed in parallel. The outer map
/// lock is only held long enough to insert or look up a session handle.
///
/// ```text
/// sessions: RwLock<HashMap<id, Arc<Mutex<Session>>>>
///                                  └── questions: Vec<Question> (index == position)
/// ```
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, Arc<Mutex<Session>>>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    async fn handle(&self, id: &str) -> Result<Arc<Mutex<Session>>> {
        let sessions = self.sessions.read().await;
        sessions
            .get(id)
            .cloned()
            .ok_or_else(|| GameError::session_not_found(id))
    }
}

fn touch(session: &mut Session) {
    session.updated_at = chrono::Utc::now().to_rfc3339();
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create_session(&self, id: &str, secret_word: &str) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        match sessions.entry(id.to_string()) {
            Entry::Occupied(_) => {
                tracing::warn!(session_id = %id, "Rejected session id collision");
                Err(GameError::session_already_exists(id))
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(Session::new(id, secret_word))));
                tracing::debug!(session_id = %id, "Session stored");
                Ok(())
            }
        }
    }

    async fn get_session(&self, id: &str) -> Result<Session> {
        let handle = self.handle(id).await?;
        let session = handle.lock().await;
        Ok(session.clone())
    }

    async fn update_session(&self, id: &str, answered: bool) -> Result<()> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        // answered is terminal: false never overwrites true
        if answered && !session.answered {
            session.answered = true;
            touch(&mut session);
            tracing::debug!(session_id = %id, "Session marked answered");
        }
        Ok(())
    }

    async fn save_question(&self, id: &str, text: &str) -> Result<usize> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        if session.is_full() {
            return Err(GameError::no_more_questions(id));
        }
        let index = session.questions.len();
        session.questions.push(Question::new(index, text));
        touch(&mut session);
        tracing::debug!(session_id = %id, index, "Question saved");
        Ok(index)
    }

    async fn save_answer(&self, id: &str, index: usize, answer: bool) -> Result<()> {
        let handle = self.handle(id).await?;
        let mut session = handle.lock().await;
        let question = session
            .questions
            .get_mut(index)
            .ok_or_else(|| GameError::question_not_found(id, index))?;
        question.answer = Some(answer);
        touch(&mut session);
        tracing::debug!(session_id = %id, index, answer, "Answer saved");
        Ok(())
    }
}
