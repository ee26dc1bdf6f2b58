//! Shared output helpers for the query commands
//!
//! Every query command accepts the same three formats. `table` is the
//! human-facing colored rendering; `json` and `yaml` serialize the view
//! model as-is for scripting.

use anyhow::Result;
use colored::{Color, Colorize};
use serde::Serialize;

use crate::views::Rgb;

/// Validate a `--format` value up front, before any work happens.
pub fn validate_format(format: &str) -> Result<()> {
    match format {
        "table" | "json" | "yaml" => Ok(()),
        _ => Err(anyhow::anyhow!(
            "Invalid format '{format}'. Valid formats are: table, json, yaml"
        )),
    }
}

/// Serialize a view model as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Serialize a view model as YAML on stdout.
pub fn print_yaml<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_yaml::to_string(value)?);
    Ok(())
}

/// Map a theme color onto the terminal.
#[must_use]
pub const fn theme_color(rgb: Rgb) -> Color {
    Color::TrueColor {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

/// Themed heading line for a page, e.g. a category title.
pub fn print_heading(title: &str, color: Color) {
    println!("{}", title.color(color).bold());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_format_accepts_known_formats() {
        for format in ["table", "json", "yaml"] {
            assert!(validate_format(format).is_ok());
        }
    }

    #[test]
    fn test_validate_format_rejects_unknown() {
        let err = validate_format("xml").unwrap_err();
        assert!(err.to_string().contains("xml"));
        assert!(err.to_string().contains("table, json, yaml"));
    }
}
