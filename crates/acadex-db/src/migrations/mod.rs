//! Favorites schema provisioning.

use rusqlite_migration::{Migrations, M};

use crate::session::{DbError, DbResult, Session};

/// SQL schema definition for the application-owned table.
const SCHEMA: &str = include_str!("schema.sql");

/// Provision the favorite_keywords table if it is absent.
///
/// Safe to call before every read; the migration runner is gated on the
/// database user_version, so re-running is a no-op.
pub fn ensure_favorites_table(session: &mut Session) -> DbResult<()> {
    let migrations = Migrations::new(vec![M::up(SCHEMA)]);

    migrations
        .to_latest(session.conn_mut())
        .map_err(|e| DbError::Migration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DbConfig;

    fn temp_db() -> (tempfile::NamedTempFile, DbConfig) {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = DbConfig {
            path: file.path().to_path_buf(),
        };
        (file, config)
    }

    #[test]
    fn provisioning_creates_the_table() {
        let (_file, config) = temp_db();

        let mut session = Session::connect(&config).unwrap();
        ensure_favorites_table(&mut session).unwrap();

        assert!(session.table_exists("favorite_keywords").unwrap());
    }

    #[test]
    fn provisioning_is_idempotent() {
        let (_file, config) = temp_db();

        let mut session = Session::connect(&config).unwrap();
        ensure_favorites_table(&mut session).unwrap();
        drop(session);

        // A second session over the same file must see the table and
        // re-running the migration must not fail.
        let mut session = Session::connect(&config).unwrap();
        ensure_favorites_table(&mut session).unwrap();
        assert!(session.table_exists("favorite_keywords").unwrap());
    }
}
