//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod favorites;
pub mod institute;
pub mod keyword;
pub mod year;

/// AcademicWorld keyword exploration
#[derive(Parser)]
#[command(name = "acadex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Keyword rankings and listings (graph store)
    #[command(subcommand)]
    Keyword(keyword::KeywordCommands),

    /// Institute rankings and listings (graph store)
    #[command(subcommand)]
    Institute(institute::InstituteCommands),

    /// Per-year keyword popularity (document store)
    #[command(subcommand)]
    Year(year::YearCommands),

    /// Favorite keywords and their statistics (relational store)
    #[command(subcommand)]
    Favorites(favorites::FavoriteCommands),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Keyword(cmd) => keyword::execute(cmd, self.json).await,
            Commands::Institute(cmd) => institute::execute(cmd, self.json).await,
            Commands::Year(cmd) => year::execute(cmd, self.json).await,
            Commands::Favorites(cmd) => favorites::execute(cmd, self.json).await,
        }
    }
}
