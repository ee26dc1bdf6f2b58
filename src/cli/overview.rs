//! Show every category with its recipes, the way the home page does.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::output;
use crate::document;
use crate::views::{self, CategoryView};

/// Command to show the whole collection, one section per category.
///
/// Categories keep their document order; recipes within each section are
/// sorted by name.
#[derive(Args)]
pub struct OverviewCommand {
    /// Output format (table, json, yaml)
    #[arg(short = 'f', long, default_value = "table")]
    format: String,
}

impl OverviewCommand {
    pub async fn execute(self, document: &str) -> Result<()> {
        output::validate_format(&self.format)?;

        let doc = document::load_document(document).await?;
        let sections = views::home_view(&doc);

        match self.format.as_str() {
            "json" => output::print_json(&sections)?,
            "yaml" => output::print_yaml(&sections)?,
            _ => print_sections(&sections),
        }

        Ok(())
    }
}

fn print_sections(sections: &[CategoryView<'_>]) {
    if sections.is_empty() {
        println!("No categories found.");
        return;
    }

    let mut total = 0;
    for section in sections {
        let theme = views::category_theme(section.key);
        output::print_heading(section.title, output::theme_color(theme.title));

        for recipe in &section.recipes {
            // Pad before colorizing so ANSI codes don't skew the column.
            let id = format!("{:>4}", format!("#{}", recipe.id));
            println!("  {}  {}", id.bright_black(), recipe.name);
        }
        println!();
        total += section.recipes.len();
    }

    println!("{}: {} recipes", "Total".green().bold(), total);
}
