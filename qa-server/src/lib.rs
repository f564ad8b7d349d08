//! qa-server: question-and-answer REST API
//!
//! Three tiers, each depending only on the one below:
//! HTTP handlers → services (validation, referential rules) → repositories.

pub mod db;
pub mod http;
pub mod models;
pub mod services;
pub mod state;

pub use http::{router, run_server, ApiError, ServerConfig, ServerError};
pub use services::{ServiceError, ServiceResult};
pub use state::AppState;
