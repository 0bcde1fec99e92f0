//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Queries over in-memory collections only ever fail one way: there was
/// nothing to return. Sums over empty input are zero and collection-valued
/// queries return empty collections, so neither produces an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A lookup matched nothing, or a reduction had no input.
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
