//! Connection-scoped relational sessions.

use rusqlite::Connection;
use serde::Deserialize;
use thiserror::Error;

/// Relational store error types.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("keyword is already a favorite: {0}")]
    Duplicate(String),

    #[error("favorite_keywords table has not been provisioned")]
    TableMissing,

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("migration error: {0}")]
    Migration(String),
}

/// Result type for relational operations.
pub type DbResult<T> = Result<T, DbError>;

/// Configuration for opening the AcademicWorld SQLite database.
#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    pub path: std::path::PathBuf,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: "academicworld.db".into(),
        }
    }
}

impl DbConfig {
    /// Read the database path from `ACADEMICWORLD_DB`, falling back to the
    /// local default.
    pub fn from_env() -> Self {
        match std::env::var("ACADEMICWORLD_DB") {
            Ok(path) => Self { path: path.into() },
            Err(_) => Self::default(),
        }
    }
}

/// One connection-scoped session: connect, act, drop.
///
/// Writes run inside an explicit transaction on the session's connection;
/// the connection closes when the session drops, so no state survives an
/// operation.
pub struct Session {
    conn: Connection,
}

impl Session {
    /// Open a fresh connection to the configured database file.
    pub fn connect(config: &DbConfig) -> DbResult<Self> {
        let conn = Connection::open(&config.path)?;
        Ok(Self { conn })
    }

    /// Whether a table exists in this database.
    pub fn table_exists(&self, name: &str) -> DbResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// The underlying connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Mutable access, needed for transactions and migrations.
    pub fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_default_path() {
        std::env::set_var("ACADEMICWORLD_DB", "/tmp/other.db");
        let config = DbConfig::from_env();
        std::env::remove_var("ACADEMICWORLD_DB");

        assert_eq!(config.path, std::path::PathBuf::from("/tmp/other.db"));
        assert_eq!(
            DbConfig::default().path,
            std::path::PathBuf::from("academicworld.db")
        );
    }
}
