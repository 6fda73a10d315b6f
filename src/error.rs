//! Uniform error response for the HTTP surface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::probe::ProbeError;

/// The single user-visible failure: a dependency was unreachable or errored.
///
/// Carries the raw underlying message text verbatim. Nothing is retried and
/// no distinction between dependencies survives past this boundary.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct AppError(pub String);

impl From<ProbeError> for AppError {
    fn from(err: ProbeError) -> Self {
        AppError(err.0)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self.0, "Dependency check failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "ok": false, "error": self.0 })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[tokio::test]
    async fn renders_500_with_the_raw_message() {
        let response = AppError("connection refused".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["ok"], false);
        assert_eq!(json["error"], "connection refused");
    }
}
