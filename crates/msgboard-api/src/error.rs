use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use msgboard_types::api::ErrorResponse;

/// Every failure a handler can hit. All of them collapse to the same 500 on
/// the wire; the variant and its detail only reach the log.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("storage error: {0:#}")]
    Storage(#[from] anyhow::Error),

    #[error("spawn_blocking join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::internal())).into_response()
    }
}
