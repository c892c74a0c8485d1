//! Domain-specific error types for verification operations.

use thiserror::Error;

/// Errors raised by verification code operations
///
/// Every precondition failure in `verify` collapses into the same kind, so
/// callers can only present a uniform "invalid or expired code" message and
/// cannot tell an expired code from a mistyped one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Invalid verification code")]
    InvalidVerificationCode,
}

pub type VerificationResult<T> = Result<T, VerificationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = VerificationError::InvalidVerificationCode;
        assert_eq!(err.to_string(), "Invalid verification code");
    }

    #[test]
    fn test_error_kinds_compare_equal() {
        // Callers match on the kind, not on a payload
        assert_eq!(
            VerificationError::InvalidVerificationCode,
            VerificationError::InvalidVerificationCode
        );
    }
}
