//! Error types for the postman-actions crate.

use thiserror::Error;

/// Errors that can occur while building the action catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("no action parameter found for request: {name}")]
    MissingAction { name: String },

    #[error("unsupported HTTP method: {method}")]
    UnsupportedMethod { method: String },

    #[error("invalid API document: {reason}")]
    InvalidDocument { reason: String },
}
