//! Health check endpoint.

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Does not touch either store.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
