//! Error types for log-space arithmetic

use thiserror::Error;

/// Errors raised by `LogFloat` construction and operators.
///
/// Negative ordinary numbers are *not* an error here: they coerce to a NaN
/// log-magnitude that propagates like any IEEE NaN.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogError {
    // Usage errors
    #[error("either a positional argument or the log keyword can be given, but not both")]
    ConflictingArguments,

    #[error("could not convert to a number: {0:?}")]
    InvalidNumber(String),

    #[error("invalid tolerance: {0}")]
    InvalidTolerance(String),

    // Domain errors
    #[error("math domain error; can't negate a logfloat instance")]
    Negation,

    #[error("math domain error: can't subtract a larger logfloat value from a smaller one")]
    NegativeDifference,
}

/// Broad classification of a [`LogError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed construction or arguments
    Usage,
    /// The mathematical result is not representable as a non-negative real
    Domain,
}

impl LogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LogError::ConflictingArguments
            | LogError::InvalidNumber(_)
            | LogError::InvalidTolerance(_) => ErrorKind::Usage,
            LogError::Negation | LogError::NegativeDifference => ErrorKind::Domain,
        }
    }

    #[inline]
    pub fn is_domain(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }
}

/// Result type for log-space operations
pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(LogError::ConflictingArguments.kind(), ErrorKind::Usage);
        assert_eq!(LogError::InvalidNumber("abc".into()).kind(), ErrorKind::Usage);
        assert_eq!(LogError::InvalidTolerance("rel".into()).kind(), ErrorKind::Usage);
        assert!(LogError::Negation.is_domain());
        assert!(LogError::NegativeDifference.is_domain());
    }

    #[test]
    fn test_domain_messages() {
        assert!(LogError::Negation.to_string().starts_with("math domain error"));
        assert!(LogError::NegativeDifference
            .to_string()
            .starts_with("math domain error"));
        assert!(LogError::ConflictingArguments
            .to_string()
            .starts_with("either a positional argument or"));
    }
}
