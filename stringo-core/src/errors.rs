//! errors.rs - Custom error types for the stringo-core library.
//!
//! The validation and transform engines never fail; every outcome there is a
//! value. The variants below cover the fallible edges of the crate: the
//! configuration layer, flag-name parsing and date handling.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `stringo-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum StringoError {
    #[error("Unknown check rule '{0}'")]
    UnknownRule(String),

    #[error("Unknown transform flag '{0}'")]
    UnknownTransformFlag(String),

    #[error("Policy '{0}' not found")]
    PolicyNotFound(String),

    #[error("Recipe '{0}' not found")]
    RecipeNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse '{input}' with layout '{layout}': {source}")]
    DateParse {
        input: String,
        layout: String,
        #[source]
        source: chrono::ParseError,
    },
}
