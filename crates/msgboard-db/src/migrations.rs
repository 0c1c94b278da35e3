use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

use crate::Database;

/// Idempotent: never drops or alters an existing `messages` table.
pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS messages (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            message     TEXT
        );
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}

impl Database {
    /// Ensure the schema exists. Safe to call any number of times.
    pub fn bootstrap(&self) -> Result<()> {
        self.with_conn(run)
    }
}
