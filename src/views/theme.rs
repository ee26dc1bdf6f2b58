//! Per-category display themes
//!
//! Each of the five named categories has its own palette; every other key
//! (including the empty string) gets the default orange palette. Theme
//! assignment is a pure function of the category key, so the same key always
//! renders the same way.

use serde::Serialize;

/// An RGB color from the site palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Display palette for a category.
///
/// `title` colors headings; the badge pair styles the recipe counter. These
/// are view-model data; mapping them onto a terminal (or anything else) is
/// the renderer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryTheme {
    /// Palette family name (e.g. "violet")
    pub name: &'static str,
    /// Heading color
    pub title: Rgb,
    /// Counter badge background
    pub badge_bg: Rgb,
    /// Counter badge foreground
    pub badge_text: Rgb,
}

/// Theme for a category key. Unknown keys fall back to the default palette.
#[must_use]
pub fn category_theme(category_key: &str) -> CategoryTheme {
    match category_key {
        "appetizers" => CategoryTheme {
            name: "violet",
            title: Rgb(130, 0, 219),
            badge_bg: Rgb(245, 243, 255),
            badge_text: Rgb(130, 0, 219),
        },
        "mains" => CategoryTheme {
            name: "emerald",
            title: Rgb(0, 122, 85),
            badge_bg: Rgb(240, 253, 244),
            badge_text: Rgb(0, 122, 85),
        },
        "desserts" => CategoryTheme {
            name: "amber",
            title: Rgb(166, 95, 0),
            badge_bg: Rgb(255, 251, 235),
            badge_text: Rgb(166, 95, 0),
        },
        "sides" => CategoryTheme {
            name: "indigo",
            title: Rgb(67, 45, 215),
            badge_bg: Rgb(239, 246, 255),
            badge_text: Rgb(67, 45, 215),
        },
        "basics" => CategoryTheme {
            name: "rose",
            title: Rgb(199, 0, 54),
            badge_bg: Rgb(253, 242, 248),
            badge_text: Rgb(199, 0, 54),
        },
        _ => CategoryTheme {
            name: "orange",
            title: Rgb(187, 77, 0),
            badge_bg: Rgb(255, 247, 237),
            badge_text: Rgb(187, 77, 0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_categories_have_distinct_palettes() {
        let keys = ["appetizers", "mains", "desserts", "sides", "basics"];
        let mut names: Vec<&str> = keys.iter().map(|k| category_theme(k).name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), keys.len());
    }

    #[test]
    fn test_unknown_key_falls_back_to_default() {
        assert_eq!(category_theme("brunch").name, "orange");
        assert_eq!(category_theme("brunch"), category_theme("anything-else"));
    }

    #[test]
    fn test_empty_key_is_just_another_unknown_key() {
        assert_eq!(category_theme(""), category_theme("brunch"));
    }

    #[test]
    fn test_assignment_is_stable() {
        assert_eq!(category_theme("mains"), category_theme("mains"));
        assert_eq!(category_theme("mains").title, Rgb(0, 122, 85));
    }
}
