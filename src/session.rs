use std::path::PathBuf;

use log::warn;
use rusqlite::{Connection, OptionalExtension};
use thiserror::Error;

use crate::models::LoginResponse;

const SESSION_KEY: &str = "hr_auth_session";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("session storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("session encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Durable client-side persistence of the active session. One JSON blob
/// under one well-known key in a local SQLite file; survives restarts,
/// cleared on logout. Single-threaded UI access assumed, so each operation
/// opens its own short-lived connection.
pub struct SessionStore {
    db_path: PathBuf,
}

impl SessionStore {
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            db_path: db_path.into(),
        };
        let conn = store.connect()?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS session_store (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )?;
        Ok(store)
    }

    fn connect(&self) -> Result<Connection, rusqlite::Error> {
        Connection::open(&self.db_path)
    }

    pub fn save(&self, session: &LoginResponse) -> Result<(), StoreError> {
        let json = serde_json::to_string(session)?;
        let conn = self.connect()?;
        conn.execute(
            "INSERT OR REPLACE INTO session_store (key, value) VALUES (?1, ?2)",
            [SESSION_KEY, json.as_str()],
        )?;
        Ok(())
    }

    /// Loads the stored session. A value that no longer deserializes (schema
    /// drift across releases) is treated as absent and purged so the next
    /// load starts clean.
    pub fn load(&self) -> Result<Option<LoginResponse>, StoreError> {
        let conn = self.connect()?;
        let json: Option<String> = conn
            .query_row(
                "SELECT value FROM session_store WHERE key = ?1",
                [SESSION_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(json) = json else {
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                warn!("session: stored session no longer parses, clearing it: {err}");
                conn.execute(
                    "DELETE FROM session_store WHERE key = ?1",
                    [SESSION_KEY],
                )?;
                Ok(None)
            }
        }
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute("DELETE FROM session_store WHERE key = ?1", [SESSION_KEY])?;
        Ok(())
    }
}
