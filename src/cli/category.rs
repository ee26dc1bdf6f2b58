//! Show one category's recipes, or the recipes attributed to one source.
//!
//! This is the category page of the site, which doubles as the source detail
//! page: `--source` takes precedence over the positional category key, the
//! same way the `source` query parameter overrides `category`.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::output;
use crate::document::{self, RecipeDocument};
use crate::index::AnnotatedRecipe;
use crate::views;

/// Command to show a category page or a source's recipes.
#[derive(Args)]
pub struct CategoryCommand {
    /// Category key (e.g. 'mains')
    #[arg(value_name = "KEY", required_unless_present = "source")]
    key: Option<String>,

    /// Show recipes from this source instead of a category
    #[arg(long, value_name = "SOURCE")]
    source: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short = 'f', long, default_value = "table")]
    format: String,
}

impl CategoryCommand {
    pub async fn execute(self, document: &str) -> Result<()> {
        output::validate_format(&self.format)?;

        let doc = document::load_document(document).await?;

        if let Some(source) = &self.source {
            self.show_source(&doc, source)
        } else {
            // clap guarantees the key is present when --source is not.
            let key = self.key.as_deref().ok_or_else(|| anyhow::anyhow!("missing category key"))?;
            self.show_category(&doc, key)
        }
    }

    fn show_category(&self, doc: &RecipeDocument, key: &str) -> Result<()> {
        let view = views::category_view(doc, key)?;

        match self.format.as_str() {
            "json" => output::print_json(&view)?,
            "yaml" => output::print_yaml(&view)?,
            _ => {
                let theme = views::category_theme(view.key);
                output::print_heading(view.title, output::theme_color(theme.title));

                if view.recipes.is_empty() {
                    println!("No recipes in this category yet.");
                    return Ok(());
                }
                for recipe in &view.recipes {
                    // Pad before colorizing so ANSI codes don't skew the column.
                    let id = format!("{:>4}", format!("#{}", recipe.id));
                    println!("  {}  {}", id.bright_black(), recipe.name);
                }
                println!();
                println!(
                    "{} {}",
                    view.recipes.len().to_string().color(output::theme_color(theme.badge_text)),
                    if view.recipes.len() == 1 { "recipe" } else { "recipes" }
                );
            }
        }

        Ok(())
    }

    fn show_source(&self, doc: &RecipeDocument, source: &str) -> Result<()> {
        let recipes = views::source_detail_view(doc, source);

        match self.format.as_str() {
            "json" => output::print_json(&recipes)?,
            "yaml" => output::print_yaml(&recipes)?,
            _ => print_source_table(source, &recipes),
        }

        Ok(())
    }
}

fn print_source_table(source: &str, recipes: &[AnnotatedRecipe<'_>]) {
    if recipes.is_empty() {
        // A source nobody cooked from is an empty state, not an error.
        println!("No recipes found for source '{source}'.");
        return;
    }

    println!("{} {}", views::source_glyph(source), source.bold());
    println!();
    for annotated in recipes {
        let id = format!("{:>4}", format!("#{}", annotated.recipe.id));
        println!(
            "  {}  {} {}",
            id.bright_black(),
            annotated.recipe.name,
            format!("({})", annotated.category).bright_black()
        );
    }
    println!();
    println!(
        "{} {}",
        recipes.len(),
        if recipes.len() == 1 { "recipe" } else { "recipes" }
    );
}
