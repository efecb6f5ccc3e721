//! Terminal output formatting.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use acadex_db::FavoriteStat;
use acadex_graph::queries::publications::CitedPublication;
use acadex_graph::queries::rankings::{FacultyScore, KeywordScore};
use acadex_mongo::KeywordYearCount;

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a visible warning for a failed backend query.
///
/// The failure is logged and rendered as an empty result; the process
/// keeps running and exits cleanly.
pub fn print_query_warning(what: &str, err: &dyn std::error::Error) {
    tracing::warn!(error = %err, what, "backend query failed");
    println!("{}", format!("{} unavailable: {}", what, err).yellow());
    println!("{}", "No results.".dimmed());
}

/// Print a flat name listing.
pub fn print_names(names: &[String], noun: &str) {
    if names.is_empty() {
        println!("{}", format!("No {}s found.", noun).dimmed());
        return;
    }

    for name in names {
        println!("{}", name);
    }

    println!();
    println!("{} {}(s) total", names.len(), noun);
}

/// Print the top-cited publication table.
pub fn print_publications(rows: &[CitedPublication]) {
    if rows.is_empty() {
        println!("{}", "No publications found.".dimmed());
        return;
    }

    println!("{:<70} {:>10}", "Publication", "Citations");
    println!("{}", "─".repeat(81));

    for row in rows {
        println!("{:<70} {:>10}", truncate(&row.title, 68), row.citations);
    }
}

/// Print the faculty KRC table.
pub fn print_faculty(rows: &[FacultyScore]) {
    if rows.is_empty() {
        println!("{}", "No faculty found.".dimmed());
        return;
    }

    println!("{:<30} {:<40} {:>10}", "Faculty", "Institute", "KRC");
    println!("{}", "─".repeat(82));

    for row in rows {
        println!(
            "{:<30} {:<40} {:>10.1}",
            truncate(&row.faculty, 28),
            truncate(&row.institute, 38),
            row.score
        );
    }
}

/// Print the per-institute keyword KRC table.
pub fn print_keyword_scores(rows: &[KeywordScore], institute: &str) {
    if rows.is_empty() {
        println!("{}", format!("No keywords found for {}.", institute).dimmed());
        return;
    }

    println!("{}", format!("Top keywords for {}", institute).bold());
    println!("{:<40} {:>10}", "Keyword", "KRC");
    println!("{}", "─".repeat(51));

    for row in rows {
        println!("{:<40} {:>10.1}", truncate(&row.keyword, 38), row.score);
    }
}

/// Print the per-year keyword popularity table.
pub fn print_year_keywords(rows: &[KeywordYearCount], year: i32) {
    if rows.is_empty() {
        println!("{}", format!("No publications found for {}.", year).dimmed());
        return;
    }

    println!("{}", format!("Top keywords in {}", year).bold());
    println!("{:<40} {:>12}", "Keyword", "Publications");
    println!("{}", "─".repeat(53));

    for row in rows {
        println!("{:<40} {:>12}", truncate(&row.keyword, 38), row.publications);
    }
}

/// Print the favorite statistics table.
pub fn print_favorite_stats(rows: &[FavoriteStat]) {
    if rows.is_empty() {
        println!("{}", "No favorite statistics available.".dimmed());
        return;
    }

    println!("{:<40} {:>12} {:>12}", "Keyword", "Publications", "KRC");
    println!("{}", "─".repeat(66));

    for row in rows {
        println!(
            "{:<40} {:>12} {:>12.1}",
            truncate(&row.keyword, 38),
            row.publications,
            row.krc
        );
    }
}

/// Truncate a string to a maximum number of characters.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
