//! Institute exploration commands (graph store).

use anyhow::{Context, Result};
use clap::Subcommand;

use acadex_graph::queries::{catalog, rankings};
use acadex_graph::GraphClient;

use crate::output;

#[derive(Subcommand)]
pub enum InstituteCommands {
    /// List all institutes
    List,

    /// Top 10 keywords by KRC score for an institute
    Keywords {
        /// Institute name (exact match)
        institute: String,
    },
}

pub async fn execute(cmd: InstituteCommands, json: bool) -> Result<()> {
    let client = GraphClient::connect_from_env()
        .await
        .context("Neo4j is unreachable; check NEO4J_URI")?;

    match cmd {
        InstituteCommands::List => match catalog::list_institutes(&client).await {
            Ok(names) if json => output::print_json(&names)?,
            Ok(names) => output::print_names(&names, "institute"),
            Err(err) => output::print_query_warning("institute list", &err),
        },
        InstituteCommands::Keywords { institute } => {
            match rankings::top_keywords_by_institute(&client, &institute).await {
                Ok(rows) if json => output::print_json(&rows)?,
                Ok(rows) => output::print_keyword_scores(&rows, &institute),
                Err(err) => output::print_query_warning("institute keywords", &err),
            }
        }
    }

    Ok(())
}
