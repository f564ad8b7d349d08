//! Route handlers organized by resource

pub mod health;
pub mod questions;
pub mod answers;

use axum::http::StatusCode;
use axum::Router;

use crate::http::extractors::PathId;
use crate::state::AppState;

/// Method fallback for `{id}` routes.
///
/// A non-numeric id means the path never matched (404 via `PathId`);
/// only a numeric id with an unsupported method is a 405.
async fn id_method_not_allowed(PathId(_): PathId) -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

/// Versioned API routes, mounted under `/api/v1`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(questions::router())
        .merge(answers::router())
}
