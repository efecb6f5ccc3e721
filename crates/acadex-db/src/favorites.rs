//! Favorite-keyword operations and derived statistics.
//!
//! The only writes in the system. Each function opens its own session
//! (connect, act, commit or roll back, disconnect) so no state is held
//! across operations.

use rusqlite::params;
use serde::Serialize;
use tracing::debug;

use crate::migrations::ensure_favorites_table;
use crate::session::{DbConfig, DbError, DbResult, Session};

/// Per-favorite aggregate over the publication tables.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteStat {
    pub keyword: String,
    pub publications: i64,
    pub krc: f64,
}

/// Provision the favorites table without reading it.
///
/// Callers that write before ever listing (the listing provisions lazily)
/// use this to bring the table into existence first.
pub fn provision_favorites(config: &DbConfig) -> DbResult<()> {
    let mut session = Session::connect(config)?;
    ensure_favorites_table(&mut session)
}

/// All stored favorite names, in storage order.
///
/// Provisions the favorites table on first use.
pub fn list_favorites(config: &DbConfig) -> DbResult<Vec<String>> {
    let mut session = Session::connect(config)?;
    ensure_favorites_table(&mut session)?;

    let mut stmt = session
        .conn()
        .prepare("SELECT name FROM favorite_keywords")?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(names)
}

/// Store a keyword as a favorite.
///
/// A primary-key violation is reported as `DbError::Duplicate`; writing to
/// a database where the table was never provisioned is reported as
/// `DbError::TableMissing`. The keyword is not checked against the shared
/// `keyword` table: a favorite may name a keyword the relational store does
/// not know, and the statistics join simply omits it.
pub fn add_favorite(config: &DbConfig, keyword: &str) -> DbResult<()> {
    let mut session = Session::connect(config)?;
    if !session.table_exists("favorite_keywords")? {
        return Err(DbError::TableMissing);
    }

    let tx = session.conn_mut().transaction()?;
    match tx.execute(
        "INSERT INTO favorite_keywords (name) VALUES (?1)",
        params![keyword],
    ) {
        Ok(_) => {
            tx.commit()?;
            debug!(keyword, "favorite added");
            Ok(())
        }
        // The transaction rolls back when dropped.
        Err(err) if is_constraint_violation(&err) => Err(DbError::Duplicate(keyword.to_string())),
        Err(err) => Err(err.into()),
    }
}

/// Remove a keyword from the favorites.
///
/// Removing a name that is not stored is still a success; the delete is not
/// existence-checked. Fails only when the favorites table itself has never
/// been provisioned.
pub fn remove_favorite(config: &DbConfig, keyword: &str) -> DbResult<()> {
    let mut session = Session::connect(config)?;
    if !session.table_exists("favorite_keywords")? {
        return Err(DbError::TableMissing);
    }

    let tx = session.conn_mut().transaction()?;
    let removed = tx.execute(
        "DELETE FROM favorite_keywords WHERE name = ?1",
        params![keyword],
    )?;
    tx.commit()?;

    debug!(keyword, removed, "favorite delete committed");
    Ok(())
}

/// Publication count and KRC per favorite keyword.
///
/// Joins the favorites against the shared `keyword`, `publication_keyword`
/// and `publication` tables, grouping by keyword. A favorite with no
/// qualifying join path contributes no row. An unprovisioned favorites
/// table yields an empty result, not an error.
pub fn favorite_scores(config: &DbConfig) -> DbResult<Vec<FavoriteStat>> {
    let session = Session::connect(config)?;
    if !session.table_exists("favorite_keywords")? {
        return Ok(Vec::new());
    }

    let mut stmt = session.conn().prepare(
        "SELECT f.name, COUNT(*), SUM(pk.score * p.num_citations)
         FROM favorite_keywords f
         JOIN keyword k ON k.name = f.name
         JOIN publication_keyword pk ON pk.keyword_id = k.id
         JOIN publication p ON p.id = pk.publication_id
         GROUP BY f.name",
    )?;
    let stats = stmt
        .query_map([], |row| {
            Ok(FavoriteStat {
                keyword: row.get(0)?,
                publications: row.get(1)?,
                krc: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(stats)
}

/// All keyword names known to the relational store.
pub fn list_keyword_names(config: &DbConfig) -> DbResult<Vec<String>> {
    let session = Session::connect(config)?;

    let mut stmt = session.conn().prepare("SELECT name FROM keyword")?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(names)
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_db() -> (tempfile::NamedTempFile, DbConfig) {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = DbConfig {
            path: file.path().to_path_buf(),
        };
        (file, config)
    }

    /// The shared AcademicWorld tables, normally provisioned externally.
    fn seed_academicworld(config: &DbConfig) {
        let session = Session::connect(config).unwrap();
        session
            .conn()
            .execute_batch(
                "CREATE TABLE keyword (id INTEGER PRIMARY KEY, name TEXT NOT NULL);
                 CREATE TABLE publication (
                     id INTEGER PRIMARY KEY,
                     title TEXT NOT NULL,
                     num_citations INTEGER NOT NULL
                 );
                 CREATE TABLE publication_keyword (
                     publication_id INTEGER NOT NULL,
                     keyword_id INTEGER NOT NULL,
                     score REAL NOT NULL
                 );
                 INSERT INTO keyword VALUES (1, 'machine learning'), (2, 'databases'), (3, 'compilers');
                 INSERT INTO publication VALUES (10, 'A Survey', 100), (11, 'A Note', 3);
                 INSERT INTO publication_keyword VALUES (10, 1, 0.5), (11, 1, 0.2), (10, 2, 0.9);",
            )
            .unwrap();
    }

    #[test]
    fn listing_provisions_the_table_and_starts_empty() {
        let (_file, config) = temp_db();

        assert!(list_favorites(&config).unwrap().is_empty());

        let session = Session::connect(&config).unwrap();
        assert!(session.table_exists("favorite_keywords").unwrap());
    }

    #[test]
    fn listing_twice_returns_identical_sequences() {
        let (_file, config) = temp_db();
        provision_favorites(&config).unwrap();
        add_favorite(&config, "databases").unwrap();
        add_favorite(&config, "compilers").unwrap();

        assert_eq!(list_favorites(&config).unwrap(), list_favorites(&config).unwrap());
    }

    #[test]
    fn adding_twice_rejects_the_duplicate_and_stores_once() {
        let (_file, config) = temp_db();
        provision_favorites(&config).unwrap();

        add_favorite(&config, "databases").unwrap();
        let err = add_favorite(&config, "databases").unwrap_err();
        assert!(matches!(err, DbError::Duplicate(k) if k == "databases"));

        assert_eq!(list_favorites(&config).unwrap(), vec!["databases"]);
    }

    #[test]
    fn adding_without_provisioning_reports_missing_table() {
        let (_file, config) = temp_db();

        let err = add_favorite(&config, "databases").unwrap_err();
        assert!(matches!(err, DbError::TableMissing));
    }

    #[test]
    fn removing_clears_the_row() {
        let (_file, config) = temp_db();
        provision_favorites(&config).unwrap();
        add_favorite(&config, "databases").unwrap();

        remove_favorite(&config, "databases").unwrap();
        assert!(list_favorites(&config).unwrap().is_empty());
    }

    #[test]
    fn removing_a_nonmember_succeeds_and_leaves_the_list_unchanged() {
        let (_file, config) = temp_db();
        provision_favorites(&config).unwrap();
        add_favorite(&config, "databases").unwrap();

        remove_favorite(&config, "compilers").unwrap();
        assert_eq!(list_favorites(&config).unwrap(), vec!["databases"]);
    }

    #[test]
    fn removing_without_provisioning_reports_missing_table() {
        let (_file, config) = temp_db();

        let err = remove_favorite(&config, "databases").unwrap_err();
        assert!(matches!(err, DbError::TableMissing));
    }

    #[test]
    fn scores_are_empty_when_the_table_was_never_provisioned() {
        let (_file, config) = temp_db();
        seed_academicworld(&config);

        assert!(favorite_scores(&config).unwrap().is_empty());
    }

    #[test]
    fn scores_cover_exactly_the_favorites_with_join_paths() {
        let (_file, config) = temp_db();
        seed_academicworld(&config);
        provision_favorites(&config).unwrap();

        // 'machine learning' has two labeled publications, 'compilers' has
        // none, and 'databases' is not a favorite at all.
        add_favorite(&config, "machine learning").unwrap();
        add_favorite(&config, "compilers").unwrap();

        let stats = favorite_scores(&config).unwrap();
        assert_eq!(stats.len(), 1);

        let ml = &stats[0];
        assert_eq!(ml.keyword, "machine learning");
        assert_eq!(ml.publications, 2);
        // 0.5 * 100 + 0.2 * 3
        assert!((ml.krc - 50.6).abs() < 1e-9);
    }

    #[test]
    fn favorites_may_reference_unknown_keywords() {
        let (_file, config) = temp_db();
        seed_academicworld(&config);
        provision_favorites(&config).unwrap();

        add_favorite(&config, "quantum basket weaving").unwrap();

        assert_eq!(
            list_favorites(&config).unwrap(),
            vec!["quantum basket weaving"]
        );
        assert!(favorite_scores(&config).unwrap().is_empty());
    }

    #[test]
    fn keyword_names_come_from_the_shared_table() {
        let (_file, config) = temp_db();
        seed_academicworld(&config);

        let names = list_keyword_names(&config).unwrap();
        assert_eq!(names, vec!["machine learning", "databases", "compilers"]);
    }
}
