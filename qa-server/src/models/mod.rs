//! Domain models with validation at construction
//!
//! User input is validated when building the insert payloads
//! (`NewQuestion`, `NewAnswer`). Invalid input returns `ValidationError`.

pub mod validation;
pub mod question;
pub mod answer;

pub use validation::ValidationError;
pub use question::{CreateQuestionRequest, NewQuestion, Question, QuestionText};
pub use answer::{Answer, AnswerText, CreateAnswerRequest, NewAnswer, UserId};
