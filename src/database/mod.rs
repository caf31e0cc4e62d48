pub mod schema;

use crate::error::AppError;
use crate::filesystem;
use rusqlite::Connection;
use std::path::PathBuf;

/// Returns the path of the local settings database
pub fn get_database_path() -> PathBuf {
    filesystem::database_path()
}

/// Opens the local database and makes sure the schema exists
pub fn init_database() -> Result<Connection, AppError> {
    let db_path = get_database_path();

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let conn = Connection::open(&db_path)?;
    schema::init_schema(&conn)?;

    Ok(conn)
}
