//! Per-year keyword popularity commands (document store).

use anyhow::Result;
use clap::Subcommand;

use acadex_mongo::{keywords, DocStore};

use crate::output;

#[derive(Subcommand)]
pub enum YearCommands {
    /// Top 10 keywords by publication count for a year
    Keywords {
        /// Publication year, e.g. 1982
        year: i32,
    },
}

pub async fn execute(cmd: YearCommands, json: bool) -> Result<()> {
    match cmd {
        YearCommands::Keywords { year } => {
            let store = match DocStore::connect_from_env().await {
                Ok(store) => store,
                Err(err) => {
                    output::print_query_warning("document store", &err);
                    return Ok(());
                }
            };

            match keywords::top_keywords_by_year(&store, year).await {
                Ok(rows) if json => output::print_json(&rows)?,
                Ok(rows) => output::print_year_keywords(&rows, year),
                Err(err) => output::print_query_warning("year keywords", &err),
            }
        }
    }

    Ok(())
}
