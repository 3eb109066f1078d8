//! Registration Error Types
//!
//! Registration-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::crypto::EntropyError;
use platform::password::PasswordHashError;
use thiserror::Error;

/// Registration-specific result type alias
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Registration-specific error variants
///
/// The two failure kinds of record construction stay distinguishable:
/// token generation failures are never reported as hashing failures and
/// vice versa. Neither is retried.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The random source could not supply token bytes
    #[error("Entropy source failure: {0}")]
    EntropySourceFailure(#[from] EntropyError),

    /// Salt generation or the hashing primitive failed
    #[error("Password hashing failure: {0}")]
    HashingFailure(#[source] PasswordHashError),

    /// Empty password supplied
    #[error("Password cannot be empty")]
    EmptyPassword,

    /// Storage collaborator rejected the record
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl RegistrationError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistrationError::EmptyPassword => ErrorKind::BadRequest,
            RegistrationError::EntropySourceFailure(_)
            | RegistrationError::HashingFailure(_)
            | RegistrationError::Persistence(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to a user-facing [`AppError`], logging the details first
    ///
    /// Server-side failures collapse into one generic message; the original
    /// error is kept only as the `source` for diagnostics.
    pub fn into_app_error(self) -> AppError {
        self.log();
        match self {
            RegistrationError::EmptyPassword => AppError::bad_request("Password cannot be empty")
                .with_action("Please enter a password"),
            other => AppError::internal("Registration failed")
                .with_action("Please try again later")
                .with_source(other),
        }
    }

    fn log(&self) {
        match self {
            RegistrationError::EntropySourceFailure(e) => {
                tracing::error!(error = %e, "Registration entropy source failure");
            }
            RegistrationError::HashingFailure(e) => {
                tracing::error!(error = %e, "Registration password hashing failure");
            }
            RegistrationError::Persistence(msg) => {
                tracing::error!(message = %msg, "Registration persistence error");
            }
            RegistrationError::EmptyPassword => {
                tracing::debug!(error = %self, "Registration rejected");
            }
        }
    }
}

impl From<PasswordHashError> for RegistrationError {
    fn from(err: PasswordHashError) -> Self {
        match err {
            PasswordHashError::EmptyPassword => RegistrationError::EmptyPassword,
            other => RegistrationError::HashingFailure(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_password_hash_error_conversion() {
        let err: RegistrationError = PasswordHashError::EmptyPassword.into();
        assert!(matches!(err, RegistrationError::EmptyPassword));

        let err: RegistrationError = PasswordHashError::HashingFailed("boom".to_string()).into();
        assert!(matches!(err, RegistrationError::HashingFailure(_)));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(RegistrationError::EmptyPassword.kind(), ErrorKind::BadRequest);
        assert_eq!(
            RegistrationError::Persistence("down".to_string()).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_app_error_hides_internal_detail() {
        let err = RegistrationError::EntropySourceFailure(EntropyError::Unavailable(
            "getrandom: ENOSYS".to_string(),
        ));
        let app = err.into_app_error();

        assert_eq!(app.kind(), ErrorKind::InternalServerError);
        assert_eq!(app.message(), "Registration failed");
        assert_eq!(app.action(), Some("Please try again later"));
        assert!(!app.to_string().contains("getrandom"));
        assert!(app.source().is_some());
    }

    #[test]
    fn test_app_error_for_empty_password() {
        let app = RegistrationError::EmptyPassword.into_app_error();
        assert_eq!(app.kind(), ErrorKind::BadRequest);
        assert_eq!(app.action(), Some("Please enter a password"));
    }
}
