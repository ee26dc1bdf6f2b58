//! List the distinct sources recipes came from.
//!
//! Labels follow the listing page's conventions: family recipes appear under
//! the family member's name, cookbook recipes under the book title.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::output;
use crate::document;
use crate::views;

/// Command to show the sources listing page.
#[derive(Args)]
pub struct SourcesCommand {
    /// Output format (table, json, yaml)
    #[arg(short = 'f', long, default_value = "table")]
    format: String,
}

impl SourcesCommand {
    pub async fn execute(self, document: &str) -> Result<()> {
        output::validate_format(&self.format)?;

        let doc = document::load_document(document).await?;
        let sources = views::source_list_view(&doc);

        match self.format.as_str() {
            "json" => output::print_json(&sources)?,
            "yaml" => output::print_yaml(&sources)?,
            _ => print_sources(&sources),
        }

        Ok(())
    }
}

fn print_sources(sources: &[String]) {
    if sources.is_empty() {
        println!("No sources found.");
        return;
    }

    for source in sources {
        println!(
            "  {}  {}",
            source,
            views::avatar_path(source).bright_black()
        );
    }
    println!();
    println!(
        "{}: {} {}",
        "Total".green().bold(),
        sources.len(),
        if sources.len() == 1 { "source" } else { "sources" }
    );
}
