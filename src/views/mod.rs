//! View-model builders
//!
//! One builder per page type: given the loaded document and the page's
//! parameters, each selects the relevant recipes through [`crate::index`],
//! sorts them for display, and packages the result. The builders return fully
//! formed view models; rendering them (terminal, JSON, anything) is the
//! caller's concern and nothing here touches presentation state.
//!
//! Display ordering is case-insensitive by recipe name throughout, with the
//! raw name as a stable tie-break (see [`display_name_cmp`]).

pub mod theme;

pub use theme::{CategoryTheme, Rgb, category_theme};

use serde::Serialize;
use std::cmp::Ordering;

use crate::core::RecipeError;
use crate::document::{Recipe, RecipeDocument};
use crate::index::{self, AnnotatedRecipe};

/// Case-insensitive display ordering for recipe names.
///
/// Ties between names that only differ in case are broken by the raw string,
/// so sorting is deterministic and stable across runs.
#[must_use]
pub fn display_name_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

fn sort_annotated(recipes: &mut [AnnotatedRecipe<'_>]) {
    recipes.sort_by(|a, b| display_name_cmp(&a.recipe.name, &b.recipe.name));
}

/// One category section, recipes sorted by name.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView<'a> {
    /// Category key (e.g. "mains")
    pub key: &'a str,
    /// Display label (e.g. "Mains")
    pub title: &'a str,
    pub recipes: Vec<&'a Recipe>,
}

/// The category page: one category's recipes, sorted by name.
pub fn category_view<'a>(
    doc: &'a RecipeDocument,
    category_key: &str,
) -> Result<CategoryView<'a>, RecipeError> {
    let (key, category) =
        doc.categories.get_key_value(category_key).ok_or_else(|| RecipeError::CategoryNotFound {
            key: category_key.to_string(),
        })?;
    let mut recipes: Vec<&Recipe> = category.recipes.iter().collect();
    recipes.sort_by(|a, b| display_name_cmp(&a.name, &b.name));
    Ok(CategoryView {
        key,
        title: &category.title,
        recipes,
    })
}

/// The home page: every category section in document order, each with its
/// recipes sorted by name.
#[must_use]
pub fn home_view(doc: &RecipeDocument) -> Vec<CategoryView<'_>> {
    doc.categories
        .keys()
        .filter_map(|key| category_view(doc, key).ok())
        .collect()
}

/// One tag section of the index page.
#[derive(Debug, Clone, Serialize)]
pub struct TagSection<'a> {
    /// Normalized (lower-case) tag
    pub tag: String,
    /// Tag with its first character upper-cased, for headings
    pub display_tag: String,
    pub recipes: Vec<AnnotatedRecipe<'a>>,
}

/// The tag index page: sections sorted by tag, recipes within each section
/// sorted by name.
#[must_use]
pub fn tag_index_view(doc: &RecipeDocument) -> Vec<TagSection<'_>> {
    index::tag_index(doc)
        .into_iter()
        .map(|(tag, mut recipes)| {
            sort_annotated(&mut recipes);
            let display_tag = capitalize(&tag);
            TagSection {
                tag,
                display_tag,
                recipes,
            }
        })
        .collect()
}

/// Upper-case the first character, leaving the rest unchanged.
fn capitalize(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The sources listing page: distinct source labels, sorted.
#[must_use]
pub fn source_list_view(doc: &RecipeDocument) -> Vec<String> {
    index::unique_sources(doc)
}

/// The source detail page: recipes from one source, sorted by name. An
/// unknown source yields an empty list, rendered as an empty state rather
/// than an error.
#[must_use]
pub fn source_detail_view<'a>(
    doc: &'a RecipeDocument,
    source_name: &str,
) -> Vec<AnnotatedRecipe<'a>> {
    let mut recipes = index::find_by_source(doc, source_name);
    sort_annotated(&mut recipes);
    recipes
}

/// The recipe detail page: one recipe with its category and theme.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetail<'a> {
    /// Key of the owning category
    pub category: &'a str,
    #[serde(flatten)]
    pub recipe: &'a Recipe,
    pub theme: CategoryTheme,
}

/// Resolve the recipe detail page for a category key and id.
pub fn recipe_detail_view<'a>(
    doc: &'a RecipeDocument,
    category_key: &str,
    id: u32,
) -> Result<RecipeDetail<'a>, RecipeError> {
    let (key, _) =
        doc.categories.get_key_value(category_key).ok_or_else(|| RecipeError::CategoryNotFound {
            key: category_key.to_string(),
        })?;
    let recipe = index::find_by_id(doc, key, id)?;
    Ok(RecipeDetail {
        category: key,
        recipe,
        theme: category_theme(key),
    })
}

/// Live search over recipe names and tags.
///
/// The query is trimmed and lower-cased; anything shorter than two characters
/// is treated as "no query" and yields nothing. Matches are case-insensitive
/// substring hits on the name or any tag, returned in flat-list order.
#[must_use]
pub fn search_results<'a>(doc: &'a RecipeDocument, raw_query: &str) -> Vec<AnnotatedRecipe<'a>> {
    let query = raw_query.trim().to_lowercase();
    if query.chars().count() < 2 {
        return Vec::new();
    }
    index::flat_list(doc)
        .into_iter()
        .filter(|annotated| {
            annotated.recipe.name.to_lowercase().contains(&query)
                || annotated.recipe.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .collect()
}

/// How a recipe's attribution should be presented on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceDisplay<'a> {
    /// A family recipe: named person with an avatar image.
    Family {
        name: &'a str,
        avatar: String,
        link: Option<&'a str>,
    },
    /// Attributed to an external source (platform or cookbook).
    Attributed {
        source: &'a str,
        glyph: &'static str,
        text: Option<&'a str>,
        subtext: Option<&'a str>,
        link: Option<&'a str>,
    },
    /// No attribution recorded.
    None,
}

/// Derive the attribution display for a recipe.
#[must_use]
pub fn source_display(recipe: &Recipe) -> SourceDisplay<'_> {
    match (recipe.source.as_deref(), recipe.source_text.as_deref()) {
        (Some("family"), Some(name)) => SourceDisplay::Family {
            name,
            avatar: avatar_path(name),
            link: recipe.source_link.as_deref(),
        },
        (Some(source), text) => SourceDisplay::Attributed {
            source,
            glyph: source_glyph(source),
            text,
            subtext: recipe.source_subtext.as_deref(),
            link: recipe.source_link.as_deref(),
        },
        (None, _) => SourceDisplay::None,
    }
}

/// Conventional avatar image path for a source name.
#[must_use]
pub fn avatar_path(source_name: &str) -> String {
    format!("assets/sources/{source_name}.jpeg")
}

/// Display glyph for a source kind, with a link glyph as the fallback.
#[must_use]
pub fn source_glyph(source: &str) -> &'static str {
    match source.to_lowercase().as_str() {
        "cookbook" => "📖",
        "instagram" => "📷",
        "youtube" => "▶",
        "family" => "👪",
        _ => "🔗",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_doc() -> RecipeDocument {
        serde_json::from_value(serde_json::json!({
            "mains": {
                "title": "Mains",
                "recipes": [
                    {"id": 1, "name": "Beef Stew", "tags": ["dinner", "comfort"],
                     "source": "youtube", "sourceText": "Chef John"}
                ]
            },
            "desserts": {
                "title": "Desserts",
                "recipes": [
                    {"id": 1, "name": "Apple Pie", "tags": ["dessert", "comfort"],
                     "source": "family", "sourceText": "Nonna", "sourceLink": "https://example.com"}
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_category_view_sorts_by_name_case_insensitively() {
        let doc: RecipeDocument = serde_json::from_value(serde_json::json!({
            "mains": {"title": "Mains", "recipes": [
                {"id": 1, "name": "beef stew"},
                {"id": 2, "name": "Aloo Gobi"},
                {"id": 3, "name": "Zucchini Boats"}
            ]}
        }))
        .unwrap();
        let view = category_view(&doc, "mains").unwrap();
        let names: Vec<&str> = view.recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Aloo Gobi", "beef stew", "Zucchini Boats"]);
    }

    #[test]
    fn test_category_view_unknown_key() {
        let doc = sample_doc();
        assert!(matches!(
            category_view(&doc, "brunch"),
            Err(RecipeError::CategoryNotFound { .. })
        ));
    }

    #[test]
    fn test_home_view_keeps_document_order() {
        let doc = sample_doc();
        let sections = home_view(&doc);
        let keys: Vec<&str> = sections.iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["mains", "desserts"]);
    }

    #[test]
    fn test_tag_index_view_concrete_scenario() {
        let doc = sample_doc();
        let sections = tag_index_view(&doc);

        let tags: Vec<&str> = sections.iter().map(|s| s.tag.as_str()).collect();
        assert_eq!(tags, vec!["comfort", "dessert", "dinner"]);

        // "comfort" pools both categories, sorted by name: Apple Pie first.
        let comfort: Vec<&str> =
            sections[0].recipes.iter().map(|a| a.recipe.name.as_str()).collect();
        assert_eq!(comfort, vec!["Apple Pie", "Beef Stew"]);

        assert_eq!(sections[0].display_tag, "Comfort");
        assert_eq!(sections[1].recipes[0].recipe.name, "Apple Pie");
        assert_eq!(sections[2].recipes[0].recipe.name, "Beef Stew");
    }

    #[test]
    fn test_tag_index_view_is_deterministic() {
        let doc = sample_doc();
        let first = serde_json::to_value(tag_index_view(&doc)).unwrap();
        let second = serde_json::to_value(tag_index_view(&doc)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_capitalize_leaves_rest_unchanged() {
        assert_eq!(capitalize("dinner"), "Dinner");
        assert_eq!(capitalize("weeknight dinner"), "Weeknight dinner");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_source_detail_view_sorted_and_empty_for_unknown() {
        let doc = sample_doc();

        let nonna = source_detail_view(&doc, "Nonna");
        assert_eq!(nonna.len(), 1);
        assert_eq!(nonna[0].recipe.name, "Apple Pie");

        assert!(source_detail_view(&doc, "nobody").is_empty());
    }

    #[test]
    fn test_recipe_detail_view_carries_theme() {
        let doc = sample_doc();
        let detail = recipe_detail_view(&doc, "desserts", 1).unwrap();
        assert_eq!(detail.recipe.name, "Apple Pie");
        assert_eq!(detail.category, "desserts");
        assert_eq!(detail.theme, category_theme("desserts"));

        assert!(matches!(
            recipe_detail_view(&doc, "desserts", 9),
            Err(RecipeError::RecipeNotFound { .. })
        ));
    }

    #[test]
    fn test_search_requires_two_characters() {
        let doc = sample_doc();
        assert!(search_results(&doc, "s").is_empty());
        assert!(search_results(&doc, "  s  ").is_empty());
        assert!(search_results(&doc, "").is_empty());
        assert!(!search_results(&doc, "st").is_empty());
    }

    #[test]
    fn test_search_matches_name_or_tag_in_flat_list_order() {
        let doc = sample_doc();

        // "comfort" hits both recipes through their tags; flat-list order
        // (mains before desserts), not alphabetical.
        let hits: Vec<&str> =
            search_results(&doc, "comfort").iter().map(|a| a.recipe.name.as_str()).collect();
        assert_eq!(hits, vec!["Beef Stew", "Apple Pie"]);

        let by_name = search_results(&doc, "APPLE");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].category, "desserts");
    }

    #[test]
    fn test_source_display_variants() {
        let doc = sample_doc();
        let pie = &doc.category("desserts").unwrap().recipes[0];
        let stew = &doc.category("mains").unwrap().recipes[0];

        assert_eq!(
            source_display(pie),
            SourceDisplay::Family {
                name: "Nonna",
                avatar: "assets/sources/Nonna.jpeg".to_string(),
                link: Some("https://example.com"),
            }
        );
        assert_eq!(
            source_display(stew),
            SourceDisplay::Attributed {
                source: "youtube",
                glyph: "▶",
                text: Some("Chef John"),
                subtext: None,
                link: None,
            }
        );

        let bare: Recipe = serde_json::from_value(serde_json::json!({"id": 1, "name": "X"})).unwrap();
        assert_eq!(source_display(&bare), SourceDisplay::None);
    }

    #[test]
    fn test_source_glyph_fallback() {
        assert_eq!(source_glyph("YouTube"), "▶");
        assert_eq!(source_glyph("someblog"), "🔗");
    }

    #[test]
    fn test_display_name_cmp_stable_tie_break() {
        assert_eq!(display_name_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(display_name_cmp("Apple", "apple"), Ordering::Less);
        assert_eq!(display_name_cmp("same", "same"), Ordering::Equal);
    }
}
