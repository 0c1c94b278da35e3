//! Database row types. These map directly to SQLite rows and are kept
//! distinct from the msgboard-types wire models.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRow {
    pub id: i64,
    pub message: Option<String>,
}
