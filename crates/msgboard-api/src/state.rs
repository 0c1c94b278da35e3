use std::sync::Arc;

use msgboard_db::Database;

pub type AppState = Arc<AppStateInner>;

/// Built once in `main` and shared with every handler through axum state.
pub struct AppStateInner {
    pub db: Database,
}

impl AppStateInner {
    pub fn new(db: Database) -> AppState {
        Arc::new(Self { db })
    }
}
