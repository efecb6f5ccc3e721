//! Top-cited publication queries.

use neo4rs::Query;
use serde::Serialize;

use crate::client::{GraphClient, GraphResult};

/// A publication ranked by summed citation count.
#[derive(Debug, Clone, Serialize)]
pub struct CitedPublication {
    pub title: String,
    pub citations: i64,
}

/// The 10 most cited publications labeled with a keyword.
///
/// Publications reachable through several faculty affiliation paths
/// (co-authored papers) are collapsed with DISTINCT before the citation
/// sum so one paper is never counted once per author.
pub async fn top_cited_publications(
    client: &GraphClient,
    keyword: &str,
) -> GraphResult<Vec<CitedPublication>> {
    let query = Query::new(
        "MATCH (:INSTITUTE)<-[:AFFILIATION_WITH]-(:FACULTY)-[:PUBLISH]->(p:PUBLICATION)-[:LABEL_BY]->(k:KEYWORD)
         WHERE k.name = $keyword
         WITH DISTINCT p
         RETURN p.title AS title, SUM(p.numCitations) AS citations
         ORDER BY citations DESC
         LIMIT 10"
            .to_string(),
    )
    .param("keyword", keyword);

    let rows = client.query(query).await?;
    let mut publications = Vec::new();
    for row in rows {
        let title: String = row.get("title").unwrap_or_default();
        if !title.is_empty() {
            publications.push(CitedPublication {
                title,
                citations: row.get("citations").unwrap_or_default(),
            });
        }
    }

    Ok(publications)
}
