//! # Acadex Graph
//!
//! Neo4j analytics over the AcademicWorld property graph.
//!
//! Provides the keyword/faculty/institute ranking queries and the
//! catalog listings used to populate selection controls.

pub mod client;
pub mod queries;

pub use client::{GraphClient, GraphConfig, GraphError, GraphResult};
