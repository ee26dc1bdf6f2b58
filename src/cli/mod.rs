//! Command-line interface for plated
//!
//! Each page of the original site maps onto one subcommand, all reading the
//! same recipe document:
//!
//! | Command | Page |
//! |---------|------|
//! | `overview` | home page with every category section |
//! | `category <KEY>` | a single category |
//! | `category --source <NAME>` | recipes from one source |
//! | `recipe --category <KEY> --id <ID>` | recipe detail |
//! | `tags` | the tag index (appendix) |
//! | `sources` | the distinct source listing |
//! | `search <QUERY>` | name/tag search |
//!
//! # Examples
//!
//! ```bash
//! # Browse the whole collection
//! plated overview
//!
//! # One category, as JSON
//! plated category mains --format json
//!
//! # A single recipe
//! plated recipe --category desserts --id 3
//!
//! # Everything Nonna ever cooked
//! plated category --source Nonna
//! ```
//!
//! The document location comes from `--document` (or `PLATED_RECIPES`),
//! defaulting to `recipes.json` in the working directory. Both filesystem
//! paths and `http(s)` URLs are accepted.

mod category;
mod overview;
pub(crate) mod output;
mod recipe;
mod search;
mod sources;
mod tags;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Main CLI structure for plated.
///
/// Global options apply to every subcommand: the document location and the
/// verbosity switches. `--verbose` and `--quiet` are mutually exclusive.
#[derive(Parser)]
#[command(
    name = "plated",
    about = "Browse a recipe collection from the command line",
    version,
    long_about = "plated reads a recipes.json document (a JSON object of categories, each \
                  holding recipes) and browses it: category pages, a tag index, source \
                  attribution pages, full recipe details, and search."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path or URL of the recipe document
    #[arg(
        long,
        global = true,
        value_name = "PATH|URL",
        env = "PLATED_RECIPES",
        default_value = "recipes.json"
    )]
    document: String,

    /// Enable verbose output (debug-level logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands, one per page type.
#[derive(Subcommand)]
enum Commands {
    /// Show every category with its recipes (the home page)
    Overview(overview::OverviewCommand),

    /// Show one category's recipes, or the recipes from one source
    Category(category::CategoryCommand),

    /// Show a single recipe in full
    Recipe(recipe::RecipeCommand),

    /// Browse all recipes grouped by tag (the appendix)
    Tags(tags::TagsCommand),

    /// List the distinct sources recipes came from
    Sources(sources::SourcesCommand),

    /// Search recipes by name or tag
    Search(search::SearchCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// Initializes logging once, then dispatches to the subcommand with the
    /// resolved document location.
    pub async fn execute(self) -> Result<()> {
        self.init_logging();

        match self.command {
            Commands::Overview(cmd) => cmd.execute(&self.document).await,
            Commands::Category(cmd) => cmd.execute(&self.document).await,
            Commands::Recipe(cmd) => cmd.execute(&self.document).await,
            Commands::Tags(cmd) => cmd.execute(&self.document).await,
            Commands::Sources(cmd) => cmd.execute(&self.document).await,
            Commands::Search(cmd) => cmd.execute(&self.document).await,
        }
    }

    /// Initialize the tracing subscriber.
    ///
    /// `RUST_LOG` wins when set; otherwise `--verbose` maps to debug and
    /// `--quiet` to errors only.
    fn init_logging(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if self.verbose {
            EnvFilter::new("debug")
        } else if self.quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::new("info")
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .try_init();
    }
}
