//! Core types for plated
//!
//! Home of the error types shared by every other module: the strongly-typed
//! [`RecipeError`] enum, the user-facing [`ErrorContext`] wrapper, and the
//! [`user_friendly_error`] conversion used at the CLI boundary.

pub mod error;

pub use error::{ErrorContext, RecipeError, user_friendly_error};
