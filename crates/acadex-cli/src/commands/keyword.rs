//! Keyword exploration commands (graph store).

use anyhow::{Context, Result};
use clap::Subcommand;

use acadex_graph::queries::{catalog, publications, rankings};
use acadex_graph::GraphClient;

use crate::output;

#[derive(Subcommand)]
pub enum KeywordCommands {
    /// List all keywords
    List,

    /// Top 10 most cited publications for a keyword
    Publications {
        /// Keyword name (exact match)
        keyword: String,
    },

    /// Top 10 faculty by KRC score for a keyword
    Faculty {
        /// Keyword name (exact match)
        keyword: String,
    },
}

pub async fn execute(cmd: KeywordCommands, json: bool) -> Result<()> {
    let client = GraphClient::connect_from_env()
        .await
        .context("Neo4j is unreachable; check NEO4J_URI")?;

    match cmd {
        KeywordCommands::List => match catalog::list_keywords(&client).await {
            Ok(names) if json => output::print_json(&names)?,
            Ok(names) => output::print_names(&names, "keyword"),
            Err(err) => output::print_query_warning("keyword list", &err),
        },
        KeywordCommands::Publications { keyword } => {
            match publications::top_cited_publications(&client, &keyword).await {
                Ok(rows) if json => output::print_json(&rows)?,
                Ok(rows) => output::print_publications(&rows),
                Err(err) => output::print_query_warning("top publications", &err),
            }
        }
        KeywordCommands::Faculty { keyword } => {
            match rankings::top_faculty_by_keyword(&client, &keyword).await {
                Ok(rows) if json => output::print_json(&rows)?,
                Ok(rows) => output::print_faculty(&rows),
                Err(err) => output::print_query_warning("top faculty", &err),
            }
        }
    }

    Ok(())
}
