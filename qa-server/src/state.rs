//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{AnswerRepository, MemoryStore, PgAnswerRepo, PgQuestionRepo, QuestionRepository};
use crate::services::{AnswerService, QuestionService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    questions: QuestionService,
    answers: AnswerService,
}

impl AppState {
    /// Wire services over the given repositories.
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        answers: Arc<dyn AnswerRepository>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                questions: QuestionService::new(questions.clone()),
                answers: AnswerService::new(answers, questions),
            }),
        }
    }

    /// PostgreSQL-backed state. The pool is shared, not owned.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgQuestionRepo::new(pool.clone())),
            Arc::new(PgAnswerRepo::new(pool)),
        )
    }

    /// State over a fresh in-process store.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store)
    }

    pub fn questions(&self) -> &QuestionService {
        &self.inner.questions
    }

    pub fn answers(&self) -> &AnswerService {
        &self.inner.answers
    }
}
