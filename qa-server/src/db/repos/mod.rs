//! Repository traits and implementations for data access
//!
//! Services only depend on the traits below, so the persistence mechanism
//! can be swapped without touching them:
//! - `PgQuestionRepo` / `PgAnswerRepo`: PostgreSQL via sqlx
//! - `MemoryStore`: in-process tables for tests and local demos

pub mod questions;
pub mod answers;
pub mod memory;

use async_trait::async_trait;

use crate::models::{Answer, NewAnswer, NewQuestion, Question};

pub use answers::PgAnswerRepo;
pub use memory::MemoryStore;
pub use questions::PgQuestionRepo;

/// Store-level error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },
}

impl StoreError {
    pub(crate) fn question_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "question",
            id,
        }
    }

    pub(crate) fn answer_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "answer",
            id,
        }
    }
}

/// Data access for questions. No business rules live here.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Insert a question; returns it with its assigned id and timestamp.
    async fn create(&self, question: NewQuestion) -> Result<Question, StoreError>;

    /// All questions, newest first. Answers are not loaded.
    async fn get_all(&self) -> Result<Vec<Question>, StoreError>;

    /// One question with its answers (oldest first).
    async fn get_by_id(&self, id: i64) -> Result<Question, StoreError>;

    /// Delete by id. Deleting a missing row is not an error here.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    async fn exists(&self, id: i64) -> Result<bool, StoreError>;
}

/// Data access for answers.
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Insert an answer; returns it with its assigned id and timestamp.
    async fn create(&self, answer: NewAnswer) -> Result<Answer, StoreError>;

    /// One answer with its parent question loaded.
    async fn get_by_id(&self, id: i64) -> Result<Answer, StoreError>;

    /// Answers for a question, oldest first.
    async fn get_by_question_id(&self, question_id: i64) -> Result<Vec<Answer>, StoreError>;

    async fn delete(&self, id: i64) -> Result<(), StoreError>;

    async fn exists(&self, id: i64) -> Result<bool, StoreError>;
}
