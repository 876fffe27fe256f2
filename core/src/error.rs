//! Common error types for Masthead.

use crate::{ArticleId, AuthorId, EntityKind, MagazineId};
use thiserror::Error;

/// Errors raised by entity construction and field writes.
///
/// `TypeConstraint` and `ValueConstraint` are the two validation failures;
/// the rest report writes that the model forbids outright.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// The value does not have the capability the field requires.
    #[error("Type constraint violated: {field} expects {expected}, got {actual}")]
    TypeConstraint {
        field: String,
        expected: String,
        actual: String,
    },

    /// The value has the right type but breaks a range or content rule.
    #[error("Value constraint violated: {field} {reason}, got {value}")]
    ValueConstraint {
        field: String,
        value: String,
        reason: String,
    },

    /// The field cannot be reassigned after construction.
    #[error("Cannot modify immutable field: {field} on {entity}")]
    Immutable { entity: EntityKind, field: String },

    /// The entity has no field with this name.
    #[error("Unknown field: {field} on {entity}")]
    UnknownField { entity: EntityKind, field: String },

    #[error("Author not found: {0}")]
    UnknownAuthor(AuthorId),

    #[error("Magazine not found: {0}")]
    UnknownMagazine(MagazineId),

    #[error("Article not found: {0}")]
    UnknownArticle(ArticleId),
}

impl ModelError {
    pub fn type_constraint(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::TypeConstraint {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn value_constraint(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::ValueConstraint {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn immutable(entity: EntityKind, field: impl Into<String>) -> Self {
        Self::Immutable {
            entity,
            field: field.into(),
        }
    }

    pub fn unknown_field(entity: EntityKind, field: impl Into<String>) -> Self {
        Self::UnknownField {
            entity,
            field: field.into(),
        }
    }

    /// Returns true for the two validation failures (type or value constraint).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ModelError::TypeConstraint { .. } | ModelError::ValueConstraint { .. }
        )
    }
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
