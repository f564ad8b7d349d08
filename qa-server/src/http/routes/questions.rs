//! Question endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PathId};
use crate::models::{CreateQuestionRequest, Question};
use crate::state::AppState;

/// GET /questions/ - all questions, newest first
async fn list_questions(State(state): State<AppState>) -> Result<Json<Vec<Question>>, ApiError> {
    tracing::debug!("Handling GET /questions/");
    let questions = state.questions().get_all_questions().await?;
    Ok(Json(questions))
}

/// POST /questions/ - create a question
async fn create_question(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<Question>), ApiError> {
    tracing::debug!("Handling POST /questions/");
    let question = state.questions().create_question(req).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

/// GET /questions/{id} - one question with its answers
async fn get_question(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<Question>, ApiError> {
    tracing::debug!(id, "Handling GET /questions/{{id}}");
    let question = state.questions().get_question_by_id(id).await?;
    Ok(Json(question))
}

/// DELETE /questions/{id}
async fn delete_question(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<StatusCode, ApiError> {
    tracing::debug!(id, "Handling DELETE /questions/{{id}}");
    state.questions().delete_question(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions/", get(list_questions).post(create_question))
        .route(
            "/questions/{id}",
            get(get_question)
                .delete(delete_question)
                .fallback(super::id_method_not_allowed),
        )
}
