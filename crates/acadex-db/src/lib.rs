//! # Acadex DB
//!
//! Relational access to the AcademicWorld SQLite database: the
//! application-owned favorite-keywords table, its derived statistics,
//! and one-shot maintenance DDL for the shared tables.
//!
//! Every operation opens its own connection-scoped session; nothing is
//! held across calls.

pub mod favorites;
pub mod maintenance;
pub mod migrations;
pub mod session;

pub use favorites::{
    add_favorite, favorite_scores, list_favorites, list_keyword_names, provision_favorites,
    remove_favorite, FavoriteStat,
};
pub use session::{DbConfig, DbError, DbResult, Session};
