//! Answer service
//!
//! Answers can only be created for an existing question. The existence
//! check and the insert are separate statements; a question deleted in
//! between surfaces as a store error from the foreign key.

use std::sync::Arc;

use tracing::info;

use super::{ServiceError, ServiceResult};
use crate::db::{AnswerRepository, QuestionRepository};
use crate::models::{Answer, AnswerText, CreateAnswerRequest, NewAnswer, UserId};

#[derive(Clone)]
pub struct AnswerService {
    answers: Arc<dyn AnswerRepository>,
    questions: Arc<dyn QuestionRepository>,
}

impl AnswerService {
    pub fn new(
        answers: Arc<dyn AnswerRepository>,
        questions: Arc<dyn QuestionRepository>,
    ) -> Self {
        Self { answers, questions }
    }

    /// Validate the payload, check the parent question, then persist.
    pub async fn create_answer(
        &self,
        question_id: i64,
        req: CreateAnswerRequest,
    ) -> ServiceResult<Answer> {
        let text = AnswerText::new(&req.text)?;
        let user_id = UserId::new(&req.user_id)?;

        if !self.questions.exists(question_id).await? {
            return Err(ServiceError::QuestionNotFound { id: question_id });
        }

        let answer = self
            .answers
            .create(NewAnswer {
                question_id,
                user_id,
                text,
            })
            .await?;
        info!(answer_id = answer.id, question_id, "answer created");
        Ok(answer)
    }

    pub async fn get_answer_by_id(&self, id: i64) -> ServiceResult<Answer> {
        Ok(self.answers.get_by_id(id).await?)
    }

    /// Answers for a question, oldest first.
    pub async fn get_answers_for_question(&self, question_id: i64) -> ServiceResult<Vec<Answer>> {
        Ok(self.answers.get_by_question_id(question_id).await?)
    }

    /// Delete an answer; `NotFound` if it doesn't exist.
    pub async fn delete_answer(&self, id: i64) -> ServiceResult<()> {
        if !self.answers.exists(id).await? {
            return Err(ServiceError::NotFound {
                resource: "answer",
                id,
            });
        }

        self.answers.delete(id).await?;
        info!(answer_id = id, "answer deleted");
        Ok(())
    }
}
