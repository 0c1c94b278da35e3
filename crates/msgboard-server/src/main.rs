use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::{error, info};

use msgboard_api::{AppState, AppStateInner};
use msgboard_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "msgboard=debug,msgboard_api=debug,msgboard_db=debug,tower_http=debug".into()
            }),
        )
        .init();

    // Config
    let db_path = std::env::var("MSGBOARD_DB_PATH").unwrap_or_else(|_| "msgboard.db".into());
    let host = std::env::var("MSGBOARD_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("MSGBOARD_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Server listening on {}", addr);

    let state = AppStateInner::new(Database::new(PathBuf::from(&db_path)));
    bootstrap(&state).await;

    let app = msgboard_api::router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the schema if it is missing. Failure is logged and never stops
/// startup; the listener binds either way.
async fn bootstrap(state: &AppState) {
    let boot = state.clone();
    match tokio::task::spawn_blocking(move || boot.db.bootstrap()).await {
        Ok(Ok(())) => info!("Connected to database"),
        Ok(Err(e)) => error!("error creating table: {:#}", e),
        Err(e) => error!("error creating table: spawn_blocking join error: {}", e),
    }
}
