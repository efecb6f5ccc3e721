//! Favorite-keyword commands (relational store).

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use tracing::debug;

use acadex_db::{favorites, DbConfig, DbError};

use crate::output;

#[derive(Subcommand)]
pub enum FavoriteCommands {
    /// List stored favorites
    List,

    /// Store a keyword as a favorite
    Add {
        /// Keyword to store; a blank value is ignored
        keyword: Option<String>,
    },

    /// Remove a favorite
    Remove {
        /// Keyword to remove
        keyword: String,
    },

    /// Publication count and KRC per favorite
    Stats,
}

pub async fn execute(cmd: FavoriteCommands, json: bool) -> Result<()> {
    let config = DbConfig::from_env();

    match cmd {
        FavoriteCommands::List => match favorites::list_favorites(&config) {
            Ok(names) if json => output::print_json(&names)?,
            Ok(names) => output::print_names(&names, "favorite"),
            Err(err) => output::print_query_warning("favorites", &err),
        },
        FavoriteCommands::Add { keyword } => add(&config, keyword.as_deref()),
        FavoriteCommands::Remove { keyword } => {
            match favorites::remove_favorite(&config, &keyword) {
                Ok(()) => println!("{} {}", "Removed".green().bold(), keyword),
                Err(DbError::TableMissing) => {
                    println!("{}", "No favorites stored yet.".dimmed());
                }
                Err(err) => output::print_query_warning("favorite removal", &err),
            }
        }
        FavoriteCommands::Stats => match favorites::favorite_scores(&config) {
            Ok(stats) if json => output::print_json(&stats)?,
            Ok(stats) => output::print_favorite_stats(&stats),
            Err(err) => output::print_query_warning("favorite statistics", &err),
        },
    }

    Ok(())
}

/// Three-way add outcome: a blank keyword is ignored silently, a duplicate
/// is rejected visibly, anything else is stored.
fn add(config: &DbConfig, keyword: Option<&str>) {
    let keyword = keyword.unwrap_or("").trim();
    if keyword.is_empty() {
        debug!("favorite add invoked without a keyword");
        return;
    }

    // The interactive surface provisions the table when it first renders
    // the favorites list; a write-first invocation does it here.
    if let Err(err) = favorites::provision_favorites(config) {
        output::print_query_warning("favorite add", &err);
        return;
    }

    match favorites::add_favorite(config, keyword) {
        Ok(()) => println!("{} {}", "Added".green().bold(), keyword),
        Err(DbError::Duplicate(_)) => {
            println!(
                "{} {} is already a favorite",
                "Rejected:".yellow().bold(),
                keyword
            );
        }
        Err(err) => output::print_query_warning("favorite add", &err),
    }
}
