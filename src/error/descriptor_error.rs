//! Construction-time errors.

/// Errors raised while building a descriptor, before any value is validated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// `intersection` needs at least one member.
    #[error("intersection requires at least one member type")]
    EmptyIntersection,

    /// A regular expression handed to a predicate did not compile.
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl DescriptorError {
    pub(crate) fn invalid_pattern(pattern: &str, error: regex::Error) -> Self {
        DescriptorError::InvalidPattern {
            pattern: pattern.to_string(),
            message: error.to_string(),
        }
    }
}
