//! Answer entity, author id and validated text

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{bounded_text, non_empty};
use super::{Question, ValidationError};

/// Maximum length for answer text
pub const MAX_ANSWER_LEN: usize = 2000;

/// Validated answer text (non-empty, max 2000 characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerText(String);

impl AnswerText {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded_text("text", s, MAX_ANSWER_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Author identifier. Opaque: only emptiness is checked, no length cap,
/// uniqueness or identity checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(String);

impl UserId {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        non_empty("user_id", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Persisted answer.
///
/// `question` is only loaded on single-answer reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub user_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Box<Question>>,
}

/// Insert payload for an answer
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub question_id: i64,
    pub user_id: UserId,
    pub text: AnswerText,
}

/// POST /questions/{id}/answers/ body
#[derive(Debug, Default, Deserialize)]
pub struct CreateAnswerRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub text: String,
}
