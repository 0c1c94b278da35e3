use crate::Database;
use crate::models::MessageRow;
use anyhow::Result;
use rusqlite::{Connection, Row};

impl Database {
    // -- Messages --

    /// All rows, in whatever order SQLite yields them.
    pub fn list_messages(&self) -> Result<Vec<MessageRow>> {
        self.with_conn(query_messages)
    }

    /// Insert `message` and return the stored row with its assigned id.
    pub fn insert_message(&self, message: &str) -> Result<MessageRow> {
        self.with_conn(|conn| {
            let row = conn.query_row(
                "INSERT INTO messages (message) VALUES (?1) RETURNING id, message",
                [message],
                map_message,
            )?;
            Ok(row)
        })
    }
}

fn query_messages(conn: &Connection) -> Result<Vec<MessageRow>> {
    let mut stmt = conn.prepare("SELECT id, message FROM messages")?;
    let rows = stmt
        .query_map([], map_message)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn map_message(row: &Row<'_>) -> rusqlite::Result<MessageRow> {
    Ok(MessageRow {
        id: row.get(0)?,
        message: row.get(1)?,
    })
}
