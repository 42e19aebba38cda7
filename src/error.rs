//! Error types for timeline evaluation
//!
//! Provides structured error types for schema validation failures and
//! metric preconditions.

use thiserror::Error;

/// Main error type for evaluation operations
#[derive(Error, Debug)]
pub enum EvalError {
    /// Input failed structural schema validation. Carries one message per
    /// detected mismatch, each prefixed with the failing instance path
    /// (`(root)` when the failure is not attributable to a sub-path).
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The timeline is structurally valid but has no events to score
    #[error("Timeline must contain at least one event")]
    EmptyTimeline,

    /// The schema document itself could not be used
    #[error("Schema error: {0}")]
    Schema(String),
}

impl EvalError {
    /// Create a validation error from a list of messages
    pub fn validation<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EvalError::Validation(messages.into_iter().map(Into::into).collect())
    }

    /// Create a schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        EvalError::Schema(msg.into())
    }

    /// Check if this error was caused by malformed input (vs. an unusable
    /// but well-formed timeline)
    pub fn is_validation(&self) -> bool {
        matches!(self, EvalError::Validation(_))
    }

    /// Messages collected during validation, if this is a validation error
    pub fn messages(&self) -> Option<&[String]> {
        match self {
            EvalError::Validation(messages) => Some(messages),
            _ => None,
        }
    }
}

/// Result type alias for evaluation operations
pub type Result<T> = std::result::Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EvalError::validation(["/meta must be object", "(root) must have required property 'events'"]);
        assert_eq!(
            err.to_string(),
            "Validation failed: /meta must be object; (root) must have required property 'events'"
        );
        assert_eq!(
            EvalError::EmptyTimeline.to_string(),
            "Timeline must contain at least one event"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(EvalError::validation(["bad"]).is_validation());
        assert!(!EvalError::EmptyTimeline.is_validation());
        assert!(!EvalError::schema("not json").is_validation());
    }

    #[test]
    fn test_messages_accessor() {
        let err = EvalError::validation(["/events must be array"]);
        assert_eq!(err.messages(), Some(&["/events must be array".to_string()][..]));
        assert_eq!(EvalError::EmptyTimeline.messages(), None);
    }
}
