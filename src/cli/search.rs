//! Search recipes by name or tag.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::output;
use crate::document;
use crate::index::AnnotatedRecipe;
use crate::views;

/// Command to search the collection.
///
/// Matching is a case-insensitive substring test against recipe names and
/// tags. Queries shorter than two characters (after trimming) match nothing.
#[derive(Args)]
pub struct SearchCommand {
    /// Search text
    #[arg(value_name = "QUERY")]
    query: String,

    /// Output format (table, json, yaml)
    #[arg(short = 'f', long, default_value = "table")]
    format: String,
}

impl SearchCommand {
    pub async fn execute(self, document: &str) -> Result<()> {
        output::validate_format(&self.format)?;

        let doc = document::load_document(document).await?;
        let results = views::search_results(&doc, &self.query);

        match self.format.as_str() {
            "json" => output::print_json(&results)?,
            "yaml" => output::print_yaml(&results)?,
            _ => print_results(&self.query, &results),
        }

        Ok(())
    }
}

fn print_results(query: &str, results: &[AnnotatedRecipe<'_>]) {
    if query.trim().chars().count() < 2 {
        println!("Type at least two characters to search.");
        return;
    }
    if results.is_empty() {
        println!("No recipes found for \"{query}\".");
        return;
    }

    for annotated in results {
        println!(
            "  {} {}",
            annotated.recipe.name,
            format!("({} #{})", annotated.category, annotated.recipe.id).bright_black()
        );
    }
    println!();
    println!(
        "{}: {} {}",
        "Total".green().bold(),
        results.len(),
        if results.len() == 1 { "match" } else { "matches" }
    );
}
