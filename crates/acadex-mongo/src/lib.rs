//! # Acadex Mongo
//!
//! Document-store aggregations over the AcademicWorld `publications`
//! collection.

pub mod client;
pub mod keywords;

pub use client::{DocStore, MongoConfig, MongoError, MongoResult};
pub use keywords::{top_keywords_by_year, KeywordYearCount};
