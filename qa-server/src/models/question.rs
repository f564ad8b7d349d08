//! Question entity and its validated text

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::bounded_text;
use super::{Answer, ValidationError};

/// Maximum length for question text
pub const MAX_QUESTION_LEN: usize = 1000;

/// Validated question text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionText(String);

impl QuestionText {
    /// Create new question text.
    ///
    /// # Rules
    /// - Non-empty (whitespace-only text is accepted)
    /// - Max 1000 characters
    ///
    /// # Example
    /// ```
    /// use qa_server::models::QuestionText;
    ///
    /// assert!(QuestionText::new("Why is the sky blue?").is_ok());
    /// assert!(QuestionText::new("").is_err());
    /// assert!(QuestionText::new("   ").is_ok());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        bounded_text("text", s, MAX_QUESTION_LEN).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for QuestionText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Persisted question.
///
/// `answers` is only loaded on single-question reads; list reads leave it
/// `None` and it is omitted from JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<Answer>>,
}

/// Insert payload for a question
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub text: QuestionText,
}

/// POST /questions/ body
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub text: String,
}
