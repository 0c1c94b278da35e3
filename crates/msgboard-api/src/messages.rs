use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use msgboard_db::models::MessageRow;
use msgboard_types::api::{DEFAULT_MESSAGE, Message, MessagesResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /`: every stored row. An empty table answers 404 with an empty list.
pub async fn get_messages(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    // Run blocking DB query off the async runtime
    let db = state.clone();
    let rows = tokio::task::spawn_blocking(move || db.db.list_messages())
        .await
        .map_err(ApiError::from)
        .and_then(|res| res.map_err(ApiError::from))
        .inspect_err(|e| error!("error getting messages: {}", e))?;

    let status = if rows.is_empty() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    Ok((status, Json(to_response(rows))))
}

/// `POST /`: insert the fixed greeting. The request body is never read.
pub async fn create_message(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let db = state.clone();
    let row = tokio::task::spawn_blocking(move || db.db.insert_message(DEFAULT_MESSAGE))
        .await
        .map_err(ApiError::from)
        .and_then(|res| res.map_err(ApiError::from))
        .inspect_err(|e| error!("error creating message: {}", e))?;

    Ok((StatusCode::CREATED, Json(to_response(vec![row]))))
}

fn to_response(rows: Vec<MessageRow>) -> MessagesResponse {
    MessagesResponse {
        messages: rows
            .into_iter()
            .map(|row| Message {
                id: row.id,
                message: row.message,
            })
            .collect(),
    }
}
