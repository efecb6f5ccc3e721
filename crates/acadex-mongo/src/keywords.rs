//! Keyword popularity by publication year.

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use serde::Serialize;
use tracing::debug;

use crate::client::{DocStore, MongoError, MongoResult};

/// A keyword ranked by publication count within one year.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordYearCount {
    pub keyword: String,
    pub publications: i64,
}

/// Aggregation pipeline for the top 10 keywords of a year.
///
/// Matches records on exact year equality, flattens the embedded keyword
/// list to one row per (publication, keyword) pair, then counts rows per
/// keyword name.
pub fn top_keywords_pipeline(year: i32) -> Vec<Document> {
    vec![
        doc! { "$match": { "year": { "$eq": year } } },
        doc! { "$unwind": "$keywords" },
        doc! { "$group": { "_id": "$keywords.name", "publications": { "$sum": 1 } } },
        doc! { "$sort": { "publications": -1 } },
        doc! { "$limit": 10 },
    ]
}

/// The 10 most-published-about keywords of a year.
///
/// Years with no publications yield an empty vec, not an error.
pub async fn top_keywords_by_year(
    store: &DocStore,
    year: i32,
) -> MongoResult<Vec<KeywordYearCount>> {
    let collection = store.database().collection::<Document>("publications");
    let mut cursor = collection
        .aggregate(top_keywords_pipeline(year))
        .await
        .map_err(MongoError::Query)?;

    let mut counts = Vec::new();
    while let Some(record) = cursor.try_next().await.map_err(MongoError::Query)? {
        let keyword = record.get_str("_id").unwrap_or_default().to_string();
        if !keyword.is_empty() {
            counts.push(KeywordYearCount {
                keyword,
                publications: count_field(&record),
            });
        }
    }

    debug!(year, results = counts.len(), "year aggregation complete");
    Ok(counts)
}

/// `$sum: 1` yields an int32 for small groups and an int64 once it grows.
fn count_field(record: &Document) -> i64 {
    record
        .get_i64("publications")
        .or_else(|_| record.get_i32("publications").map(i64::from))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_filters_on_exact_year() {
        let pipeline = top_keywords_pipeline(1982);
        assert_eq!(pipeline[0], doc! { "$match": { "year": { "$eq": 1982 } } });
        assert_eq!(pipeline[1], doc! { "$unwind": "$keywords" });
    }

    #[test]
    fn pipeline_groups_by_name_sorts_descending_and_truncates() {
        let pipeline = top_keywords_pipeline(2001);
        assert_eq!(
            pipeline[2],
            doc! { "$group": { "_id": "$keywords.name", "publications": { "$sum": 1 } } }
        );
        assert_eq!(pipeline[3], doc! { "$sort": { "publications": -1 } });
        assert_eq!(pipeline[4], doc! { "$limit": 10 });
    }

    #[test]
    fn count_field_accepts_both_integer_widths() {
        assert_eq!(count_field(&doc! { "publications": 3_i32 }), 3);
        assert_eq!(count_field(&doc! { "publications": 7_i64 }), 7);
        assert_eq!(count_field(&doc! {}), 0);
    }
}
