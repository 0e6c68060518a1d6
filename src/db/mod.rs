pub mod initialize;
pub mod queries;

use std::path::Path;

use rusqlite::Connection;

use crate::errors::AppResult;

/// Open the SQLite database at `path` (created if missing).
pub fn open(path: &str) -> AppResult<Connection> {
    let conn = Connection::open(Path::new(path))?;
    Ok(conn)
}
