//! Service layer - validation and referential rules
//!
//! Sits between the HTTP handlers and the repositories. Translates store
//! results into `ServiceError` variants the handlers can match on.

pub mod error;
pub mod questions;
pub mod answers;

pub use answers::AnswerService;
pub use error::{ServiceError, ServiceResult};
pub use questions::QuestionService;

#[cfg(test)]
pub(crate) mod tests {
    use async_trait::async_trait;

    use crate::db::{AnswerRepository, QuestionRepository, StoreError};
    use crate::models::{Answer, NewAnswer, NewQuestion, Question};

    /// Repository whose every call fails like a dropped connection
    pub struct FailingStore;

    fn fail<T>() -> Result<T, StoreError> {
        Err(StoreError::Sqlx(sqlx::Error::PoolClosed))
    }

    #[async_trait]
    impl QuestionRepository for FailingStore {
        async fn create(&self, _: NewQuestion) -> Result<Question, StoreError> {
            fail()
        }
        async fn get_all(&self) -> Result<Vec<Question>, StoreError> {
            fail()
        }
        async fn get_by_id(&self, _: i64) -> Result<Question, StoreError> {
            fail()
        }
        async fn delete(&self, _: i64) -> Result<(), StoreError> {
            fail()
        }
        async fn exists(&self, _: i64) -> Result<bool, StoreError> {
            fail()
        }
    }

    #[async_trait]
    impl AnswerRepository for FailingStore {
        async fn create(&self, _: NewAnswer) -> Result<Answer, StoreError> {
            fail()
        }
        async fn get_by_id(&self, _: i64) -> Result<Answer, StoreError> {
            fail()
        }
        async fn get_by_question_id(&self, _: i64) -> Result<Vec<Answer>, StoreError> {
            fail()
        }
        async fn delete(&self, _: i64) -> Result<(), StoreError> {
            fail()
        }
        async fn exists(&self, _: i64) -> Result<bool, StoreError> {
            fail()
        }
    }
}
