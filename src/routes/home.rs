//! Root acknowledgment endpoint.

use axum::Json;
use serde::Serialize;

/// Body of the root response.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub ok: bool,
    pub message: &'static str,
}

/// Root handler.
///
/// Responds unconditionally with a static acknowledgment. Consults no state
/// and has no failure path.
pub async fn index() -> Json<RootResponse> {
    Json(RootResponse {
        ok: true,
        message: "Backend container is running",
    })
}
