//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - One `PgPool` created at startup and passed in explicitly
//! - Single-statement operations only (no multi-step transactions)
//! - Repositories sit behind narrow traits so services never see sqlx

pub mod pool;
pub mod migrations;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
