//! Error types for sqlweave

use thiserror::Error;

/// Result type alias for sqlweave operations
pub type WeaveResult<T> = Result<T, WeaveError>;

/// Errors raised while describing tables or building statements.
///
/// Every error is fatal to the statement being built: the builder that
/// produced it should be dropped.
#[derive(Debug, Error)]
pub enum WeaveError {
    /// Unknown or unmapped member referenced by a predicate, order clause or column subset
    #[error("Mapping error on member '{member}': {message}")]
    Mapping { member: String, message: String },

    /// Predicate node that cannot be rendered as a filter
    #[error("Unsupported predicate: {0}")]
    UnsupportedPredicate(String),

    /// Value sub-expression that cannot be reduced to a concrete value
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// Bind parameter name already present in the collection
    #[error("Duplicate bind parameter: {0}")]
    DuplicateParameter(String),

    /// Custom dialect with inconsistent settings
    #[error("Invalid dialect: {0}")]
    InvalidDialect(String),

    /// Statement that would render no usable SQL
    #[error("Validation error: {0}")]
    Validation(String),
}

impl WeaveError {
    /// Create a mapping error for a specific member
    pub fn mapping(member: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Mapping {
            member: member.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported predicate error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedPredicate(message.into())
    }

    /// Create an evaluation error
    pub fn evaluation(message: impl Into<String>) -> Self {
        Self::Evaluation(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a mapping error
    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping { .. })
    }

    /// Check if this is an unsupported predicate error
    pub fn is_unsupported_predicate(&self) -> bool {
        matches!(self, Self::UnsupportedPredicate(_))
    }

    /// Check if this is an evaluation error
    pub fn is_evaluation(&self) -> bool {
        matches!(self, Self::Evaluation(_))
    }

    /// Check if this is a duplicate parameter error
    pub fn is_duplicate_parameter(&self) -> bool {
        matches!(self, Self::DuplicateParameter(_))
    }
}
