//! Question repository backed by PostgreSQL
//!
//! - get_all: newest first, no answers
//! - get_by_id: single LEFT JOIN for question + answers (no N+1)

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Row};

use super::{QuestionRepository, StoreError};
use crate::models::{Answer, NewQuestion, Question};

/// Question row without answers
#[derive(Debug, Clone, FromRow)]
struct QuestionRow {
    id: i64,
    text: String,
    created_at: DateTime<Utc>,
}

impl From<QuestionRow> for Question {
    fn from(r: QuestionRow) -> Self {
        Self {
            id: r.id,
            text: r.text,
            created_at: r.created_at,
            answers: None,
        }
    }
}

/// Question repository
#[derive(Clone)]
pub struct PgQuestionRepo {
    pool: PgPool,
}

impl PgQuestionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepo {
    async fn create(&self, question: NewQuestion) -> Result<Question, StoreError> {
        let row: QuestionRow = sqlx::query_as(
            r#"
            INSERT INTO questions (text)
            VALUES ($1)
            RETURNING id, text, created_at
            "#,
        )
        .bind(question.text.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_all(&self) -> Result<Vec<Question>, StoreError> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            r#"
            SELECT id, text, created_at
            FROM questions
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Question, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT
                q.id,
                q.text,
                q.created_at,
                a.id AS answer_id,
                a.user_id AS answer_user_id,
                a.text AS answer_text,
                a.created_at AS answer_created_at
            FROM questions q
            LEFT JOIN answers a ON a.question_id = q.id
            WHERE q.id = $1
            ORDER BY a.created_at ASC, a.id ASC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let first = rows.first().ok_or_else(|| StoreError::question_not_found(id))?;
        let mut question = Question {
            id: first.get("id"),
            text: first.get("text"),
            created_at: first.get("created_at"),
            answers: None,
        };

        // LEFT JOIN yields one all-NULL answer row when there are none
        let answers = rows
            .iter()
            .filter_map(|r| {
                let answer_id: Option<i64> = r.get("answer_id");
                answer_id.map(|answer_id| Answer {
                    id: answer_id,
                    question_id: question.id,
                    user_id: r.get("answer_user_id"),
                    text: r.get("answer_text"),
                    created_at: r.get("answer_created_at"),
                    question: None,
                })
            })
            .collect();
        question.answers = Some(answers);

        Ok(question)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}
