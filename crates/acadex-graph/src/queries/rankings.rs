//! KRC ranking queries.
//!
//! KRC for a path set is `SUM(label_score * citation_count)` over the
//! PUBLISH → LABEL_BY paths reachable from the selected node.

use neo4rs::Query;
use serde::Serialize;

use crate::client::{GraphClient, GraphResult};

/// A faculty member ranked by KRC for one keyword.
#[derive(Debug, Clone, Serialize)]
pub struct FacultyScore {
    pub faculty: String,
    pub institute: String,
    pub score: f64,
}

/// A keyword ranked by KRC for one institute.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordScore {
    pub keyword: String,
    pub score: f64,
}

/// The 10 highest-KRC faculty for a keyword, with their institutes.
pub async fn top_faculty_by_keyword(
    client: &GraphClient,
    keyword: &str,
) -> GraphResult<Vec<FacultyScore>> {
    let query = Query::new(
        "MATCH (i:INSTITUTE)<-[:AFFILIATION_WITH]-(f:FACULTY)-[:PUBLISH]->(p:PUBLICATION)-[l:LABEL_BY]->(k:KEYWORD)
         WHERE k.name = $keyword
         RETURN f.name AS faculty, i.name AS institute, SUM(l.score * p.numCitations) AS score
         ORDER BY score DESC
         LIMIT 10"
            .to_string(),
    )
    .param("keyword", keyword);

    let rows = client.query(query).await?;
    let mut faculty = Vec::new();
    for row in rows {
        let name: String = row.get("faculty").unwrap_or_default();
        if !name.is_empty() {
            faculty.push(FacultyScore {
                faculty: name,
                institute: row.get("institute").unwrap_or_default(),
                score: row.get("score").unwrap_or(0.0),
            });
        }
    }

    Ok(faculty)
}

/// The 10 highest-KRC keywords for an institute.
pub async fn top_keywords_by_institute(
    client: &GraphClient,
    institute: &str,
) -> GraphResult<Vec<KeywordScore>> {
    let query = Query::new(
        "MATCH (i:INSTITUTE)<-[:AFFILIATION_WITH]-(f:FACULTY)-[:PUBLISH]->(p:PUBLICATION)-[l:LABEL_BY]->(k:KEYWORD)
         WHERE i.name = $institute
         RETURN k.name AS keyword, SUM(l.score * p.numCitations) AS score
         ORDER BY score DESC
         LIMIT 10"
            .to_string(),
    )
    .param("institute", institute);

    let rows = client.query(query).await?;
    let mut keywords = Vec::new();
    for row in rows {
        let name: String = row.get("keyword").unwrap_or_default();
        if !name.is_empty() {
            keywords.push(KeywordScore {
                keyword: name,
                score: row.get("score").unwrap_or(0.0),
            });
        }
    }

    Ok(keywords)
}
