//! plated - browse a recipe collection from the command line
//!
//! plated reads a single `recipes.json` document (a JSON object mapping
//! category keys to `{ title, recipes }`) and turns each page of a recipe
//! site into a subcommand: category pages, a tag index, a source listing,
//! recipe details, and search.
//!
//! # Architecture Overview
//!
//! The pipeline is load → index → view → render:
//! - [`document`] loads and parses the recipe document (file or URL). The
//!   document is read-only; every invocation works from a fresh load.
//! - [`index`] builds derived views over the document: the annotated flat
//!   list, the tag index, category-scoped id lookup, and source identity.
//! - [`views`] turns a page request plus the index into a sorted,
//!   display-ready view model, including the per-category theme.
//! - [`cli`] parses arguments and renders view models as a colored table,
//!   JSON, or YAML.
//!
//! Recipe ids are only unique within their category, so everything that
//! pools recipes across categories goes through
//! [`index::AnnotatedRecipe`], which carries the owning category key.
//!
//! # Command-Line Usage
//!
//! ```bash
//! # The whole collection, one section per category
//! plated overview
//!
//! # One category page
//! plated category mains
//!
//! # A recipe in full
//! plated recipe --category desserts --id 3
//!
//! # Cross-category browsing
//! plated tags
//! plated sources
//! plated category --source Nonna
//! plated search "apple"
//!
//! # Any document location works
//! plated overview --document https://example.com/recipes.json
//! ```

pub mod cli;
pub mod core;
pub mod document;
pub mod index;
pub mod views;
