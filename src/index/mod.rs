//! Derived, queryable views over a loaded recipe document
//!
//! The document nests recipes inside categories; every page needs some other
//! shape of the same data. This module builds those shapes without mutating
//! the document:
//!
//! - [`flat_list`] - every recipe with its category key attached
//! - [`tag_index`] - normalized tag → recipes carrying that tag
//! - [`find_by_id`] - category-scoped id lookup
//! - [`find_by_source`] - recipes attributed to one source
//! - [`unique_sources`] - the distinct source labels, sorted
//!
//! All of these are rebuilt from the document on every invocation; none hold
//! state of their own, so building twice from the same document yields
//! identical results.
//!
//! Source identity comes in two flavors, kept deliberately separate:
//! [`source_key`] is the canonical identity used for equality and filtering,
//! while [`source_label`] is the display-derived name used by the source
//! listing (where cookbook titles are shortened). Conflating them would
//! entangle display formatting with equality logic.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::core::RecipeError;
use crate::document::{Recipe, RecipeDocument};

/// A recipe paired with its owning category key.
///
/// Recipe ids are only unique within a category, so any collection that pools
/// recipes across categories must carry the category alongside. Serializes as
/// the recipe's fields plus a `category` field.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnnotatedRecipe<'a> {
    /// Key of the owning category
    pub category: &'a str,
    #[serde(flatten)]
    pub recipe: &'a Recipe,
}

/// Mapping from normalized (lower-cased) tag to the recipes carrying it.
///
/// Bucket contents keep flat-list order; consumers re-sort by name before
/// display.
pub type TagIndex<'a> = BTreeMap<String, Vec<AnnotatedRecipe<'a>>>;

/// Flatten the document into a single annotated list.
///
/// Categories are visited in document order, recipes in their in-category
/// order. No sorting.
#[must_use]
pub fn flat_list(doc: &RecipeDocument) -> Vec<AnnotatedRecipe<'_>> {
    doc.categories
        .iter()
        .flat_map(|(key, category)| {
            category.recipes.iter().map(move |recipe| AnnotatedRecipe {
                category: key,
                recipe,
            })
        })
        .collect()
}

/// Group every recipe under each of its tags, normalized to lower case.
///
/// A recipe tagged `["Dinner", "Quick"]` lands under both `dinner` and
/// `quick`; a recipe without tags contributes nothing. Bucket insertion order
/// follows [`flat_list`], so the result is deterministic for a fixed
/// document.
#[must_use]
pub fn tag_index(doc: &RecipeDocument) -> TagIndex<'_> {
    let mut index = TagIndex::new();
    for annotated in flat_list(doc) {
        for tag in &annotated.recipe.tags {
            index.entry(tag.to_lowercase()).or_default().push(annotated);
        }
    }
    debug!(tags = index.len(), "built tag index");
    index
}

/// Look up a recipe by id within one category.
///
/// The lookup is strictly category-scoped: an id from one category never
/// matches a recipe in another.
pub fn find_by_id<'a>(
    doc: &'a RecipeDocument,
    category_key: &str,
    id: u32,
) -> Result<&'a Recipe, RecipeError> {
    let category = doc.category(category_key).ok_or_else(|| RecipeError::CategoryNotFound {
        key: category_key.to_string(),
    })?;
    category.recipes.iter().find(|r| r.id == id).ok_or_else(|| RecipeError::RecipeNotFound {
        category: category_key.to_string(),
        id,
    })
}

/// Canonical source identity of a recipe.
///
/// Family recipes are identified by the family member in `sourceText`; every
/// other recipe by its `source` value. Recipes without a source have no key.
#[must_use]
pub fn source_key(recipe: &Recipe) -> Option<&str> {
    match (recipe.source.as_deref(), recipe.source_text.as_deref()) {
        (Some("family"), Some(text)) => Some(text),
        (source, _) => source,
    }
}

/// Display label for the source listing page.
///
/// Like [`source_key`], except cookbook recipes are labelled by the book
/// title: the segment of `sourceText` after `" - "`, or the whole text when
/// no separator is present. This is a presentation-derived name only; use
/// [`source_key`] for equality.
#[must_use]
pub fn source_label(recipe: &Recipe) -> Option<String> {
    let source = recipe.source.as_deref()?;
    let label = match (source, recipe.source_text.as_deref()) {
        ("family", Some(text)) => text,
        ("cookbook", Some(text)) => text.split_once(" - ").map_or(text, |(_, book)| book),
        _ => source,
    };
    Some(label.to_string())
}

/// All recipes whose canonical source matches `source_name`, in flat-list
/// order. An unknown source yields an empty list, not an error.
#[must_use]
pub fn find_by_source<'a>(doc: &'a RecipeDocument, source_name: &str) -> Vec<AnnotatedRecipe<'a>> {
    flat_list(doc)
        .into_iter()
        .filter(|annotated| source_key(annotated.recipe) == Some(source_name))
        .collect()
}

/// The distinct source labels across the document, sorted ascending.
///
/// Uses the display-derived [`source_label`]; recipes without a source are
/// skipped.
#[must_use]
pub fn unique_sources(doc: &RecipeDocument) -> Vec<String> {
    let mut sources: Vec<String> =
        flat_list(doc).iter().filter_map(|a| source_label(a.recipe)).collect();
    sources.sort();
    sources.dedup();
    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: u32, name: &str) -> serde_json::Value {
        serde_json::json!({"id": id, "name": name})
    }

    fn sample_doc() -> RecipeDocument {
        serde_json::from_value(serde_json::json!({
            "mains": {
                "title": "Mains",
                "recipes": [
                    {"id": 1, "name": "Beef Stew", "tags": ["Dinner", "Comfort"],
                     "source": "youtube", "sourceText": "Chef John"},
                    {"id": 2, "name": "Aloo Gobi", "tags": ["dinner"],
                     "source": "cookbook", "sourceText": "Meera Sodha - Made in India"}
                ]
            },
            "desserts": {
                "title": "Desserts",
                "recipes": [
                    {"id": 1, "name": "Apple Pie", "tags": ["Dessert", "comfort"],
                     "source": "family", "sourceText": "Nonna"}
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_flat_list_covers_every_recipe_in_order() {
        let doc = sample_doc();
        let flat = flat_list(&doc);

        assert_eq!(flat.len(), doc.recipe_count());
        let pairs: Vec<(&str, &str)> =
            flat.iter().map(|a| (a.category, a.recipe.name.as_str())).collect();
        assert_eq!(
            pairs,
            vec![("mains", "Beef Stew"), ("mains", "Aloo Gobi"), ("desserts", "Apple Pie")]
        );
    }

    #[test]
    fn test_tag_index_normalizes_and_pools_across_categories() {
        let doc = sample_doc();
        let index = tag_index(&doc);

        // "Comfort" and "comfort" land in one bucket, across categories.
        let comfort: Vec<&str> =
            index["comfort"].iter().map(|a| a.recipe.name.as_str()).collect();
        assert_eq!(comfort, vec!["Beef Stew", "Apple Pie"]);

        assert_eq!(index["dessert"].len(), 1);
        assert_eq!(index["dinner"].len(), 2);
        assert!(!index.contains_key("Comfort"));
    }

    #[test]
    fn test_tag_index_skips_untagged_recipes() {
        let doc: RecipeDocument = serde_json::from_value(serde_json::json!({
            "basics": {"title": "Basics", "recipes": [recipe(1, "Stock")]}
        }))
        .unwrap();
        assert!(tag_index(&doc).is_empty());
    }

    #[test]
    fn test_find_by_id_is_category_scoped() {
        let doc = sample_doc();

        // Both categories contain id 1; each lookup resolves to its own.
        assert_eq!(find_by_id(&doc, "mains", 1).unwrap().name, "Beef Stew");
        assert_eq!(find_by_id(&doc, "desserts", 1).unwrap().name, "Apple Pie");

        assert!(matches!(
            find_by_id(&doc, "desserts", 2),
            Err(RecipeError::RecipeNotFound { id: 2, .. })
        ));
        assert!(matches!(
            find_by_id(&doc, "brunch", 1),
            Err(RecipeError::CategoryNotFound { .. })
        ));
    }

    #[test]
    fn test_source_key_family_uses_source_text() {
        let doc = sample_doc();
        let pie = find_by_id(&doc, "desserts", 1).unwrap();
        let stew = find_by_id(&doc, "mains", 1).unwrap();
        let aloo = find_by_id(&doc, "mains", 2).unwrap();

        assert_eq!(source_key(pie), Some("Nonna"));
        assert_eq!(source_key(stew), Some("youtube"));
        // Canonical key for a cookbook recipe is still "cookbook".
        assert_eq!(source_key(aloo), Some("cookbook"));
    }

    #[test]
    fn test_find_by_source_matches_canonical_key() {
        let doc = sample_doc();

        let nonna = find_by_source(&doc, "Nonna");
        assert_eq!(nonna.len(), 1);
        assert_eq!(nonna[0].recipe.name, "Apple Pie");
        assert_eq!(nonna[0].category, "desserts");

        assert!(find_by_source(&doc, "nobody").is_empty());
    }

    #[test]
    fn test_unique_sources_applies_cookbook_label_and_sorts() {
        let doc = sample_doc();
        assert_eq!(unique_sources(&doc), vec!["Made in India", "Nonna", "youtube"]);
    }

    #[test]
    fn test_unique_sources_deduplicates() {
        let doc: RecipeDocument = serde_json::from_value(serde_json::json!({
            "mains": {"title": "Mains", "recipes": [
                {"id": 1, "name": "A", "source": "youtube"},
                {"id": 2, "name": "B", "source": "youtube"},
                {"id": 3, "name": "C"}
            ]}
        }))
        .unwrap();
        // Shared sources collapse; the sourceless recipe is skipped.
        assert_eq!(unique_sources(&doc), vec!["youtube"]);
    }

    #[test]
    fn test_cookbook_label_without_separator_keeps_whole_text() {
        let doc: RecipeDocument = serde_json::from_value(serde_json::json!({
            "mains": {"title": "Mains", "recipes": [
                {"id": 1, "name": "A", "source": "cookbook", "sourceText": "Joy of Cooking"},
                {"id": 2, "name": "B", "source": "cookbook"}
            ]}
        }))
        .unwrap();
        let joy = &doc.category("mains").unwrap().recipes[0];
        let bare = &doc.category("mains").unwrap().recipes[1];

        assert_eq!(source_label(joy).as_deref(), Some("Joy of Cooking"));
        // No sourceText at all falls back to the raw source value.
        assert_eq!(source_label(bare).as_deref(), Some("cookbook"));
    }

    #[test]
    fn test_annotated_recipe_serializes_flattened() {
        let doc = sample_doc();
        let flat = flat_list(&doc);
        let value = serde_json::to_value(flat[0]).unwrap();

        assert_eq!(value["category"], "mains");
        assert_eq!(value["name"], "Beef Stew");
        assert_eq!(value["id"], 1);
    }
}
