//! Question service

use std::sync::Arc;

use tracing::info;

use super::{ServiceError, ServiceResult};
use crate::db::QuestionRepository;
use crate::models::{CreateQuestionRequest, NewQuestion, Question, QuestionText};

#[derive(Clone)]
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Validate and persist a new question.
    pub async fn create_question(&self, req: CreateQuestionRequest) -> ServiceResult<Question> {
        let text = QuestionText::new(&req.text)?;
        let question = self.questions.create(NewQuestion { text }).await?;
        info!(question_id = question.id, "question created");
        Ok(question)
    }

    pub async fn get_all_questions(&self) -> ServiceResult<Vec<Question>> {
        Ok(self.questions.get_all().await?)
    }

    pub async fn get_question_by_id(&self, id: i64) -> ServiceResult<Question> {
        Ok(self.questions.get_by_id(id).await?)
    }

    /// Delete a question; `NotFound` if it doesn't exist.
    pub async fn delete_question(&self, id: i64) -> ServiceResult<()> {
        if !self.questions.exists(id).await? {
            return Err(ServiceError::NotFound {
                resource: "question",
                id,
            });
        }

        self.questions.delete(id).await?;
        info!(question_id = id, "question deleted");
        Ok(())
    }
}
