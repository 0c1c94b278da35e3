pub mod migrations;
pub mod models;
pub mod queries;

use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

/// Handle to the message store.
///
/// The connection is opened on first use rather than in the constructor, so
/// the server can come up while storage is unreachable. A failed open leaves
/// the slot empty and the next caller tries again.
pub struct Database {
    path: PathBuf,
    conn: Mutex<Option<Connection>>,
}

impl Database {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            conn: Mutex::new(None),
        }
    }

    /// Acquire the connection (opening it if needed) and run `f` against it.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let mut slot = self
            .conn
            .lock()
            .map_err(|e| anyhow::anyhow!("DB lock poisoned: {}", e))?;

        if slot.is_none() {
            *slot = Some(self.open()?);
        }

        match slot.as_ref() {
            Some(conn) => f(conn),
            None => Err(anyhow::anyhow!("DB connection unavailable")),
        }
    }

    fn open(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)?;

        // WAL mode for concurrent reads; in-memory databases ignore it
        conn.pragma_update(None, "journal_mode", "WAL")?;

        info!("Database opened at {}", self.path.display());
        Ok(conn)
    }
}
