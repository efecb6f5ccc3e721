//! MongoDB connection client.

use mongodb::bson::doc;
use mongodb::{Client, Database};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Document store error types.
#[derive(Error, Debug)]
pub enum MongoError {
    #[error("MongoDB connection error: {0}")]
    Connection(#[source] mongodb::error::Error),

    #[error("MongoDB query error: {0}")]
    Query(#[source] mongodb::error::Error),
}

/// Result type for document store operations.
pub type MongoResult<T> = Result<T, MongoError>;

/// Configuration for connecting to MongoDB.
#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "academicworld".to_string(),
        }
    }
}

impl MongoConfig {
    /// Read configuration from `MONGODB_*` environment variables, falling
    /// back to the local development defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            uri: std::env::var("MONGODB_URI").unwrap_or(defaults.uri),
            database: std::env::var("MONGODB_DATABASE").unwrap_or(defaults.database),
        }
    }
}

/// Client for AcademicWorld document aggregations.
#[derive(Clone)]
pub struct DocStore {
    db: Database,
}

impl DocStore {
    /// Create a new DocStore from config.
    ///
    /// The driver connects lazily; a `ping` forces a round trip so that an
    /// unreachable server fails here instead of on the first aggregation.
    pub async fn connect(config: &MongoConfig) -> MongoResult<Self> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(MongoError::Connection)?;
        let db = client.database(&config.database);

        db.run_command(doc! { "ping": 1 })
            .await
            .map_err(MongoError::Connection)?;

        debug!(uri = %config.uri, database = %config.database, "connected to MongoDB");
        Ok(Self { db })
    }

    /// Create a new DocStore from the environment.
    pub async fn connect_from_env() -> MongoResult<Self> {
        Self::connect(&MongoConfig::from_env()).await
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }
}
