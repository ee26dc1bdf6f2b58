//! Error handling for plated
//!
//! The error system has two layers:
//! 1. [`RecipeError`] - strongly-typed errors for every failure case, so code
//!    can match on precise conditions
//! 2. [`ErrorContext`] - a wrapper that adds user-friendly details and
//!    actionable suggestions for CLI display
//!
//! Common library errors convert automatically:
//! - [`std::io::Error`] → [`RecipeError::IoError`]
//! - [`serde_json::Error`] → [`RecipeError::JsonError`]
//! - [`reqwest::Error`] → [`RecipeError::HttpError`]
//!
//! At the top level, [`user_friendly_error`] turns any [`anyhow::Error`] into
//! an [`ErrorContext`] with a suggestion tailored to the failure, which is
//! then printed in color on stderr.
//!
//! Empty results are never errors: a search with no matches or a source
//! nobody cooked from renders an empty-state message and exits successfully.
//! Only structurally absent keys (an unknown category, an id that does not
//! exist within its category) surface as not-found failures.

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for recipe-browsing operations.
///
/// Load failures (`DocumentNotFound`, `DocumentFetchFailed`,
/// `DocumentParseError`) are terminal: they are reported once and the command
/// aborts. Lookup failures (`CategoryNotFound`, `RecipeNotFound`) are
/// user-visible "not found" conditions for keys that do not exist in the
/// document.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// The recipe document does not exist at the given path
    #[error("Recipe document not found: {path}")]
    DocumentNotFound {
        /// Path that was checked for the document
        path: String,
    },

    /// Fetching the recipe document over HTTP failed
    ///
    /// Raised for connection failures and for non-success status codes.
    #[error("Failed to fetch recipe document from {url}: {reason}")]
    DocumentFetchFailed {
        /// URL the document was requested from
        url: String,
        /// Why the fetch failed (connection error or HTTP status)
        reason: String,
    },

    /// The recipe document is not valid JSON, or does not match the expected
    /// shape
    #[error("Invalid recipe document in {file}")]
    DocumentParseError {
        /// Path or URL the document came from
        file: String,
        /// The underlying parse failure
        reason: String,
    },

    /// No category with this key exists in the document
    #[error("Category '{key}' not found")]
    CategoryNotFound {
        /// The category key that was requested
        key: String,
    },

    /// The category exists but contains no recipe with this id
    ///
    /// Ids are only unique within a category, so the category is part of the
    /// error.
    #[error("Recipe {id} not found in category '{category}'")]
    RecipeNotFound {
        /// The category that was searched
        category: String,
        /// The recipe id that was requested
        id: u32,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

/// Error context wrapper that provides user-friendly error information.
///
/// Wraps a [`RecipeError`] with optional details and a suggestion. When
/// displayed, errors show:
/// 1. **Error**: the main message in red
/// 2. **Details**: additional context in yellow (optional)
/// 3. **Suggestion**: actionable steps in green (optional)
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: RecipeError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no additional information attached.
    #[must_use]
    pub const fn new(error: RecipeError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with an actionable
/// suggestion.
///
/// Recognizes [`RecipeError`] variants and attaches context tailored to each;
/// everything else is passed through with its full causal chain as the
/// message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    match error.downcast::<RecipeError>() {
        Ok(recipe_error) => create_error_context(recipe_error),
        Err(other) => ErrorContext::new(RecipeError::Other {
            message: format!("{other:#}"),
        }),
    }
}

/// Attach per-variant details and suggestions to a [`RecipeError`].
fn create_error_context(error: RecipeError) -> ErrorContext {
    match &error {
        RecipeError::DocumentNotFound { .. } => ErrorContext::new(error)
            .with_details(
                "plated loads recipes.json from the current directory unless --document points elsewhere",
            )
            .with_suggestion(
                "Pass --document <PATH|URL> or run from the directory containing recipes.json",
            ),
        RecipeError::DocumentFetchFailed { .. } => ErrorContext::new(error)
            .with_suggestion("Check the URL and your network connection, then try again"),
        RecipeError::DocumentParseError { .. } => ErrorContext::new(error)
            .with_details(
                "The document must be a JSON object mapping category keys to { title, recipes }",
            )
            .with_suggestion("Validate the document with a JSON linter"),
        RecipeError::CategoryNotFound { .. } => ErrorContext::new(error)
            .with_suggestion("Run 'plated overview' to see the available categories"),
        RecipeError::RecipeNotFound { category, .. } => {
            let suggestion =
                format!("Run 'plated category {category}' to list the recipes in that category");
            ErrorContext::new(error).with_suggestion(suggestion)
        }
        _ => ErrorContext::new(error),
    }
}
