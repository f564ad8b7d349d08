//! Answer endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, PathId};
use crate::models::{Answer, CreateAnswerRequest};
use crate::state::AppState;

/// POST /questions/{id}/answers/ - answer an existing question
async fn create_answer(
    State(state): State<AppState>,
    PathId(question_id): PathId,
    JsonBody(req): JsonBody<CreateAnswerRequest>,
) -> Result<(StatusCode, Json<Answer>), ApiError> {
    tracing::debug!(question_id, "Handling POST /questions/{{id}}/answers/");
    let answer = state.answers().create_answer(question_id, req).await?;
    Ok((StatusCode::CREATED, Json(answer)))
}

/// GET /answers/{id} - one answer with its question
async fn get_answer(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Json<Answer>, ApiError> {
    tracing::debug!(id, "Handling GET /answers/{{id}}");
    let answer = state.answers().get_answer_by_id(id).await?;
    Ok(Json(answer))
}

/// DELETE /answers/{id}
async fn delete_answer(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<StatusCode, ApiError> {
    tracing::debug!(id, "Handling DELETE /answers/{{id}}");
    state.answers().delete_answer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Answer routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions/{id}/answers/",
            post(create_answer).fallback(super::id_method_not_allowed),
        )
        .route(
            "/answers/{id}",
            get(get_answer)
                .delete(delete_answer)
                .fallback(super::id_method_not_allowed),
        )
}
