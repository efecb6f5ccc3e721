//! Catalog listings used to populate selection controls.

use neo4rs::Query;

use crate::client::{GraphClient, GraphResult};

/// All keyword names, ascending.
pub async fn list_keywords(client: &GraphClient) -> GraphResult<Vec<String>> {
    let query = Query::new(
        "MATCH (k:KEYWORD)
         RETURN k.name AS name
         ORDER BY name"
            .to_string(),
    );

    Ok(collect_names(client.query(query).await?))
}

/// All institute names, ascending.
pub async fn list_institutes(client: &GraphClient) -> GraphResult<Vec<String>> {
    let query = Query::new(
        "MATCH (i:INSTITUTE)
         RETURN i.name AS name
         ORDER BY name"
            .to_string(),
    );

    Ok(collect_names(client.query(query).await?))
}

fn collect_names(rows: Vec<neo4rs::Row>) -> Vec<String> {
    rows.into_iter()
        .filter_map(|row| {
            let name: String = row.get("name").unwrap_or_default();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}
