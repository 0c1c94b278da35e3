pub mod error;
pub mod messages;
pub mod state;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use state::{AppState, AppStateInner};

/// Build the full HTTP surface: both message routes, permissive CORS, and
/// per-request tracing.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(messages::get_messages).post(messages::create_message))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
