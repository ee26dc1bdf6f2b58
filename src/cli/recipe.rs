//! Show a single recipe in full: meta, attribution, ingredients and steps.

use anyhow::Result;
use clap::Args;
use colored::{Color, Colorize};

use super::output;
use crate::document;
use crate::views::{self, RecipeDetail, SourceDisplay};

/// Command to show the recipe detail page.
///
/// Both the category and the id are required because ids are only unique
/// within their category.
#[derive(Args)]
pub struct RecipeCommand {
    /// Category key the recipe lives in
    #[arg(long, value_name = "KEY")]
    category: String,

    /// Recipe id within the category
    #[arg(long, value_name = "ID")]
    id: u32,

    /// Output format (table, json, yaml)
    #[arg(short = 'f', long, default_value = "table")]
    format: String,
}

impl RecipeCommand {
    pub async fn execute(self, document: &str) -> Result<()> {
        output::validate_format(&self.format)?;

        let doc = document::load_document(document).await?;
        let detail = views::recipe_detail_view(&doc, &self.category, self.id)?;

        match self.format.as_str() {
            "json" => output::print_json(&detail)?,
            "yaml" => output::print_yaml(&detail)?,
            _ => print_detail(&detail),
        }

        Ok(())
    }
}

fn print_detail(detail: &RecipeDetail<'_>) {
    let recipe = detail.recipe;
    let title_color = output::theme_color(detail.theme.title);

    output::print_heading(&recipe.name, title_color);

    if !recipe.description.is_empty() {
        println!("{}", recipe.description);
        println!();
    }

    print_meta_row(recipe);
    print_source(views::source_display(recipe), title_color);

    if !recipe.ingredients.is_empty() {
        println!("{}", "Ingredients".color(title_color).bold());
        for ingredient in &recipe.ingredients {
            println!("  • {ingredient}");
        }
        println!();
    }

    print_steps("Preparation", &recipe.preparation, title_color);
    print_steps("Instructions", &recipe.instructions, title_color);

    if let Some(notes) = &recipe.notes {
        println!("{}", "Notes".color(title_color).bold());
        println!("  {notes}");
        println!();
    }

    if !recipe.tags.is_empty() {
        println!("{} {}", "Tags:".bright_black(), recipe.tags.join(", ").bright_black());
    }
}

fn print_meta_row(recipe: &crate::document::Recipe) {
    let mut parts = Vec::new();
    if !recipe.prep_time.is_empty() {
        parts.push(format!("Prep: {}", recipe.prep_time));
    }
    if !recipe.cook_time.is_empty() {
        parts.push(format!("Cook: {}", recipe.cook_time));
    }
    if !recipe.servings.is_empty() {
        parts.push(format!("Serves: {}", recipe.servings));
    }
    if !parts.is_empty() {
        println!("{}", parts.join("  |  ").bright_black());
        println!();
    }
}

fn print_source(display: SourceDisplay<'_>, title_color: Color) {
    match display {
        SourceDisplay::Family { name, avatar, link } => {
            println!("{} {}", views::source_glyph("family"), name.color(title_color).bold());
            println!("  {}", avatar.bright_black());
            if let Some(link) = link {
                println!("  {}", link.underline());
            }
        }
        SourceDisplay::Attributed {
            glyph,
            text,
            subtext,
            link,
            source,
        } => {
            let label = text.unwrap_or(source);
            println!("{} {}", glyph, label.color(title_color).bold());
            if let Some(subtext) = subtext {
                println!("  {subtext}");
            }
            if let Some(link) = link {
                println!("  {}", link.underline());
            }
        }
        SourceDisplay::None => {
            println!("{} {}", views::source_glyph("default"), "N/A".bright_black());
        }
    }
    println!();
}

fn print_steps(title: &str, steps: &[String], title_color: Color) {
    if steps.is_empty() {
        return;
    }
    println!("{}", title.color(title_color).bold());
    for (number, step) in steps.iter().enumerate() {
        println!("  {}. {step}", number + 1);
    }
    println!();
}
