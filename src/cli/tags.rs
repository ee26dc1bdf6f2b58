//! Browse every recipe grouped by tag, the appendix page of the site.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::output;
use crate::document;
use crate::views::{self, TagSection};

/// Command to show the tag index: one section per tag, sorted by tag, with
/// each section's recipes sorted by name.
#[derive(Args)]
pub struct TagsCommand {
    /// Output format (table, json, yaml)
    #[arg(short = 'f', long, default_value = "table")]
    format: String,
}

impl TagsCommand {
    pub async fn execute(self, document: &str) -> Result<()> {
        output::validate_format(&self.format)?;

        let doc = document::load_document(document).await?;
        let sections = views::tag_index_view(&doc);

        match self.format.as_str() {
            "json" => output::print_json(&sections)?,
            "yaml" => output::print_yaml(&sections)?,
            _ => print_sections(&sections),
        }

        Ok(())
    }
}

fn print_sections(sections: &[TagSection<'_>]) {
    if sections.is_empty() {
        println!("No tags found.");
        return;
    }

    for section in sections {
        println!("{}", section.display_tag.cyan().bold());
        for annotated in &section.recipes {
            println!(
                "  {} {}",
                annotated.recipe.name,
                format!("({} #{})", annotated.category, annotated.recipe.id).bright_black()
            );
        }
        println!();
    }

    println!(
        "{}: {} {}",
        "Total".green().bold(),
        sections.len(),
        if sections.len() == 1 { "tag" } else { "tags" }
    );
}
