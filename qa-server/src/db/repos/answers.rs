//! Answer repository backed by PostgreSQL

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Row};

use super::{AnswerRepository, StoreError};
use crate::models::{Answer, NewAnswer, Question};

/// Answer row without its question
#[derive(Debug, Clone, FromRow)]
struct AnswerRow {
    id: i64,
    question_id: i64,
    user_id: String,
    text: String,
    created_at: DateTime<Utc>,
}

impl From<AnswerRow> for Answer {
    fn from(r: AnswerRow) -> Self {
        Self {
            id: r.id,
            question_id: r.question_id,
            user_id: r.user_id,
            text: r.text,
            created_at: r.created_at,
            question: None,
        }
    }
}

/// Answer repository
#[derive(Clone)]
pub struct PgAnswerRepo {
    pool: PgPool,
}

impl PgAnswerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswerRepository for PgAnswerRepo {
    async fn create(&self, answer: NewAnswer) -> Result<Answer, StoreError> {
        // The FK rejects a question deleted after the service's existence check
        let row: AnswerRow = sqlx::query_as(
            r#"
            INSERT INTO answers (question_id, user_id, text)
            VALUES ($1, $2, $3)
            RETURNING id, question_id, user_id, text, created_at
            "#,
        )
        .bind(answer.question_id)
        .bind(answer.user_id.as_str())
        .bind(answer.text.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn get_by_id(&self, id: i64) -> Result<Answer, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT
                a.id,
                a.question_id,
                a.user_id,
                a.text,
                a.created_at,
                q.text AS question_text,
                q.created_at AS question_created_at
            FROM answers a
            JOIN questions q ON q.id = a.question_id
            WHERE a.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::answer_not_found(id))?;

        let question_id: i64 = row.get("question_id");
        Ok(Answer {
            id: row.get("id"),
            question_id,
            user_id: row.get("user_id"),
            text: row.get("text"),
            created_at: row.get("created_at"),
            question: Some(Box::new(Question {
                id: question_id,
                text: row.get("question_text"),
                created_at: row.get("question_created_at"),
                answers: None,
            })),
        })
    }

    async fn get_by_question_id(&self, question_id: i64) -> Result<Vec<Answer>, StoreError> {
        let rows: Vec<AnswerRow> = sqlx::query_as(
            r#"
            SELECT id, question_id, user_id, text, created_at
            FROM answers
            WHERE question_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Answer::from).collect())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn exists(&self, id: i64) -> Result<bool, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM answers WHERE id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count > 0)
    }
}
