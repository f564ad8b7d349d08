//! In-process store implementing both repository traits
//!
//! Mirrors the PostgreSQL schema: sequential ids starting at 1, server-side
//! timestamps, and cascade of answers when their question is deleted.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::{AnswerRepository, QuestionRepository, StoreError};
use crate::models::{Answer, NewAnswer, NewQuestion, Question};

#[derive(Default)]
struct Tables {
    questions: BTreeMap<i64, Question>,
    answers: BTreeMap<i64, Answer>,
    next_question_id: i64,
    next_answer_id: i64,
}

impl Tables {
    fn answers_for(&self, question_id: i64) -> Vec<Answer> {
        let mut answers: Vec<Answer> = self
            .answers
            .values()
            .filter(|a| a.question_id == question_id)
            .cloned()
            .collect();
        answers.sort_by_key(|a| (a.created_at, a.id));
        answers
    }
}

/// Shared in-memory tables. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionRepository for MemoryStore {
    async fn create(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let mut tables = self.tables.lock().await;
        tables.next_question_id += 1;

        let created = Question {
            id: tables.next_question_id,
            text: question.text.into_string(),
            created_at: Utc::now(),
            answers: None,
        };
        tables.questions.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_all(&self) -> Result<Vec<Question>, StoreError> {
        let tables = self.tables.lock().await;
        let mut questions: Vec<Question> = tables.questions.values().cloned().collect();
        questions.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(questions)
    }

    async fn get_by_id(&self, id: i64) -> Result<Question, StoreError> {
        let tables = self.tables.lock().await;
        let mut question = tables
            .questions
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::question_not_found(id))?;
        question.answers = Some(tables.answers_for(id));
        Ok(question)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        if tables.questions.remove(&id).is_some() {
            tables.answers.retain(|_, a| a.question_id != id);
        }
        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.tables.lock().await.questions.contains_key(&id))
    }
}

#[async_trait]
impl AnswerRepository for MemoryStore {
    async fn create(&self, answer: NewAnswer) -> Result<Answer, StoreError> {
        let mut tables = self.tables.lock().await;

        // Same outcome as the foreign key constraint
        if !tables.questions.contains_key(&answer.question_id) {
            return Err(StoreError::question_not_found(answer.question_id));
        }

        tables.next_answer_id += 1;
        let created = Answer {
            id: tables.next_answer_id,
            question_id: answer.question_id,
            user_id: answer.user_id.as_str().to_owned(),
            text: answer.text.as_str().to_owned(),
            created_at: Utc::now(),
            question: None,
        };
        tables.answers.insert(created.id, created.clone());
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<Answer, StoreError> {
        let tables = self.tables.lock().await;
        let mut answer = tables
            .answers
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::answer_not_found(id))?;
        answer.question = tables.questions.get(&answer.question_id).cloned().map(Box::new);
        Ok(answer)
    }

    async fn get_by_question_id(&self, question_id: i64) -> Result<Vec<Answer>, StoreError> {
        Ok(self.tables.lock().await.answers_for(question_id))
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.tables.lock().await.answers.remove(&id);
        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.tables.lock().await.answers.contains_key(&id))
    }
}
