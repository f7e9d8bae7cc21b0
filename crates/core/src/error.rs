//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation, missing
/// targets). Infrastructure concerns belong to the store crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A draft was submitted without a usable client name.
    #[error("client name is required")]
    MissingClientName,

    /// A line item (by position) is missing its description, or the draft
    /// carries no items at all.
    #[error("line item {index} is missing a description")]
    IncompleteLineItem { index: usize },

    /// Removing this line item would leave the invoice without any.
    #[error("an invoice needs at least one line item")]
    LastLineItem,

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The targeted invoice does not exist.
    #[error("invoice not found")]
    NotFound,
}

impl DomainError {
    pub fn incomplete_line_item(index: usize) -> Self {
        Self::IncompleteLineItem { index }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
