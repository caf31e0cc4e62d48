use crate::error::AppError;
use rusqlite::{Connection, OptionalExtension};

/// Settings key the session token is stored under
pub const TOKEN_KEY: &str = "auth_token";

/// Reads a settings value
pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>, AppError> {
    let value = conn
        .query_row(
            "SELECT value FROM app_settings WHERE key = ?1",
            [key],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

/// Inserts or replaces a settings value
pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<(), AppError> {
    conn.execute(
        "INSERT INTO app_settings (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (key, value),
    )?;
    Ok(())
}

pub fn delete_setting(conn: &Connection, key: &str) -> Result<(), AppError> {
    conn.execute("DELETE FROM app_settings WHERE key = ?1", [key])?;
    Ok(())
}

/// Returns the stored session token; an empty value counts as absent
pub fn load_token(conn: &Connection) -> Result<Option<String>, AppError> {
    Ok(get_setting(conn, TOKEN_KEY)?.filter(|t| !t.trim().is_empty()))
}

pub fn save_token(conn: &Connection, token: &str) -> Result<(), AppError> {
    if token.trim().is_empty() {
        return Err(AppError::Validation("Token must not be empty".to_string()));
    }
    set_setting(conn, TOKEN_KEY, token)?;
    log::info!("Session token stored");
    Ok(())
}

pub fn clear_token(conn: &Connection) -> Result<(), AppError> {
    delete_setting(conn, TOKEN_KEY)?;
    log::info!("Session token removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        database::schema::init_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_missing_token_is_none() {
        let conn = setup();
        assert_eq!(load_token(&conn).unwrap(), None);
    }

    #[test]
    fn test_save_overwrite_and_clear() {
        let conn = setup();
        save_token(&conn, "first").unwrap();
        save_token(&conn, "second").unwrap();
        assert_eq!(load_token(&conn).unwrap(), Some("second".to_string()));

        clear_token(&conn).unwrap();
        assert_eq!(load_token(&conn).unwrap(), None);
        // clearing twice is fine
        clear_token(&conn).unwrap();
    }

    #[test]
    fn test_empty_token_rejected() {
        let conn = setup();
        assert!(matches!(save_token(&conn, "  "), Err(AppError::Validation(_))));
        set_setting(&conn, TOKEN_KEY, "").unwrap();
        assert_eq!(load_token(&conn).unwrap(), None);
    }
}
