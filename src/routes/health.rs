//! Health check endpoint proving the backend can reach Postgres and Redis.
//!
//! Used by container orchestration to verify not just that the process is
//! alive but that both dependencies answer.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppError;
use crate::probe;
use crate::state::AppState;

/// Success body for the health route.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub postgres: PostgresStatus,
    pub redis: String,
}

/// The single `db_ok` column returned by the literal probe query.
#[derive(Debug, Serialize)]
pub struct PostgresStatus {
    pub db_ok: i32,
}

/// Health check handler.
///
/// Queries Postgres, ensures the Redis connection is open, and pings Redis,
/// in that order. The first failure converts into a 500 carrying the raw
/// error text; no partial results are reported.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let report = probe::check(state.db.as_ref(), state.cache.as_ref()).await?;

    Ok(Json(HealthResponse {
        ok: true,
        postgres: PostgresStatus {
            db_ok: report.db_ok,
        },
        redis: report.cache_reply,
    }))
}
