//! Recipe document model and loading
//!
//! The recipe document is a single JSON object mapping category keys to
//! categories, each holding an ordered list of recipes:
//!
//! ```json
//! {
//!   "mains": {
//!     "title": "Mains",
//!     "recipes": [
//!       {
//!         "id": 1,
//!         "name": "Beef Stew",
//!         "imageUrl": "assets/recipes/beef-stew.jpeg",
//!         "tags": ["Dinner", "Comfort"],
//!         "source": "family",
//!         "sourceText": "Nonna"
//!       }
//!     ]
//!   }
//! }
//! ```
//!
//! The order of categories in the document is their canonical display order,
//! so the map is an [`IndexMap`] rather than a hash map. Recipe ids are only
//! unique within their category.
//!
//! [`load_document`] accepts either a filesystem path or an `http(s)` URL and
//! produces a parsed [`RecipeDocument`]. A load failure is terminal for the
//! invocation: there is no retry and no partial result.
//!
//! Missing optional fields degrade gracefully (a recipe without `tags` simply
//! has none); only `id` and `name` are required per recipe, and `title` per
//! category.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::core::RecipeError;

/// A single recipe as it appears in the document.
///
/// Field names on the wire are camelCase. `id` is unique within the owning
/// category only; use [`crate::index::AnnotatedRecipe`] whenever recipes
/// from different categories are pooled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Identifier, unique within the owning category
    pub id: u32,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub prep_time: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub servings: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Mise-en-place steps, shown before the instructions
    #[serde(default)]
    pub preparation: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Free-text labels, compared case-insensitively
    ///
    /// A `tags` value that is not an array of strings means "no tags", not a
    /// parse error.
    #[serde(default, deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    /// Origin kind ("family", "cookbook", "youtube", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Origin display text; for family recipes this is the person's name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_subtext: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Accept any JSON value where tags are expected, keeping only string array
/// elements. Everything else degrades to an empty tag list.
fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(tag) => Some(tag),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// A named grouping of recipes, the top-level navigation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Human-readable display label (e.g. "Mains")
    pub title: String,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

/// The whole recipe collection, keyed by category.
///
/// Insertion order of the underlying map is the canonical display order of
/// categories. The document is read-only after construction; every
/// invocation builds its derived views from a freshly loaded instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeDocument {
    /// Categories in document order
    pub categories: IndexMap<String, Category>,
}

impl RecipeDocument {
    /// Look up a category by key.
    #[must_use]
    pub fn category(&self, key: &str) -> Option<&Category> {
        self.categories.get(key)
    }

    /// Total number of recipes across all categories.
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.categories.values().map(|c| c.recipes.len()).sum()
    }
}

/// Parse a recipe document, attributing failures to `origin` (a path or URL).
fn parse_document(text: &str, origin: &str) -> Result<RecipeDocument, RecipeError> {
    let doc: RecipeDocument =
        serde_json::from_str(text).map_err(|e| RecipeError::DocumentParseError {
            file: origin.to_string(),
            reason: e.to_string(),
        })?;
    debug!(
        categories = doc.categories.len(),
        recipes = doc.recipe_count(),
        %origin,
        "parsed recipe document"
    );
    Ok(doc)
}

/// Load the recipe document from a filesystem path or an `http(s)` URL.
pub async fn load_document(location: &str) -> Result<RecipeDocument, RecipeError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        load_from_url(location).await
    } else {
        load_from_path(Path::new(location)).await
    }
}

async fn load_from_path(path: &Path) -> Result<RecipeDocument, RecipeError> {
    if !path.exists() {
        return Err(RecipeError::DocumentNotFound {
            path: path.display().to_string(),
        });
    }
    let text = tokio::fs::read_to_string(path).await?;
    parse_document(&text, &path.display().to_string())
}

async fn load_from_url(url: &str) -> Result<RecipeDocument, RecipeError> {
    debug!(%url, "fetching recipe document");
    let fetch_failed = |reason: String| RecipeError::DocumentFetchFailed {
        url: url.to_string(),
        reason,
    };

    let response = reqwest::get(url).await.map_err(|e| fetch_failed(e.to_string()))?;
    // Mirror a browser's response.ok check: any non-2xx status is a failure.
    let response = response
        .error_for_status()
        .map_err(|e| fetch_failed(e.status().map_or_else(|| e.to_string(), |s| s.to_string())))?;
    let text = response.text().await.map_err(|e| fetch_failed(e.to_string()))?;
    parse_document(&text, url)
}
