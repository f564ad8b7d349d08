//! Schema setup for the questions/answers tables
//!
//! Statements are idempotent so this runs on every startup.

use sqlx::PgPool;

/// Deleting a question removes its answers (`ON DELETE CASCADE`).
const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS questions (
        id BIGSERIAL PRIMARY KEY,
        text VARCHAR(1000) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS answers (
        id BIGSERIAL PRIMARY KEY,
        question_id BIGINT NOT NULL REFERENCES questions(id) ON DELETE CASCADE,
        user_id TEXT NOT NULL,
        text VARCHAR(2000) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_answers_question_created
        ON answers (question_id, created_at)
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_questions_created
        ON questions (created_at DESC)
    "#,
];

/// Create tables and indexes if they don't exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema migrations...");

    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Schema migrations complete");
    Ok(())
}
