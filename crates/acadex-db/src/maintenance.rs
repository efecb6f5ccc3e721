//! One-shot administrative DDL for the shared AcademicWorld tables.
//!
//! These statements are constant; no user input reaches them.

use tracing::info;

use crate::session::{DbConfig, DbResult, Session};

/// Secondary index on `keyword.name`, the join column of the favorite
/// statistics query.
pub fn ensure_keyword_index(config: &DbConfig) -> DbResult<()> {
    let session = Session::connect(config)?;
    session
        .conn()
        .execute_batch("CREATE INDEX IF NOT EXISTS idx_keyword_name ON keyword (name)")?;

    info!("keyword name index present");
    Ok(())
}

/// Insert guard keeping `publication_keyword` scores non-negative.
pub fn ensure_score_guard(config: &DbConfig) -> DbResult<()> {
    let session = Session::connect(config)?;
    session.conn().execute_batch(
        "CREATE TRIGGER IF NOT EXISTS publication_keyword_score_check
         BEFORE INSERT ON publication_keyword
         WHEN NEW.score < 0
         BEGIN
             SELECT RAISE(ABORT, 'score cannot be negative');
         END",
    )?;

    info!("publication_keyword score guard present");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_db() -> (tempfile::NamedTempFile, DbConfig) {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = DbConfig {
            path: file.path().to_path_buf(),
        };
        let session = Session::connect(&config).unwrap();
        session
            .conn()
            .execute_batch(
                "CREATE TABLE keyword (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
                 CREATE TABLE publication_keyword (
                     publication_id INTEGER NOT NULL,
                     keyword_id INTEGER NOT NULL,
                     score REAL NOT NULL
                 );",
            )
            .unwrap();
        (file, config)
    }

    #[test]
    fn index_creation_is_idempotent() {
        let (_file, config) = seeded_db();

        ensure_keyword_index(&config).unwrap();
        ensure_keyword_index(&config).unwrap();
    }

    #[test]
    fn score_guard_rejects_negative_scores() {
        let (_file, config) = seeded_db();
        ensure_score_guard(&config).unwrap();

        let session = Session::connect(&config).unwrap();
        session
            .conn()
            .execute(
                "INSERT INTO publication_keyword VALUES (1, 1, 0.4)",
                [],
            )
            .unwrap();

        let err = session
            .conn()
            .execute("INSERT INTO publication_keyword VALUES (1, 2, -0.1)", [])
            .unwrap_err();
        assert!(err.to_string().contains("score cannot be negative"));
    }
}
