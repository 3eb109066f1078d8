//! Registration Builder
//!
//! Assembles a [`RegistrationRecord`]: token first, then password hash.
//! The first failure is returned as-is and no partial record escapes.

use std::sync::Arc;

use platform::crypto::{EntropySource, OsEntropy};
use platform::password::{ClearTextPassword, PasswordHasher};
use platform::token::TokenGenerator;

use crate::application::config::RegistrationConfig;
use crate::domain::entity::registration::RegistrationRecord;
use crate::domain::value_object::{
    registration_token::RegistrationToken, user_password::UserPassword,
};
use crate::error::RegistrationResult;

/// Builds registration records from raw sign-up input
///
/// Stateless apart from its configuration; share it freely between
/// threads. Two builds with identical input never produce equal tokens
/// or equal password hashes.
pub struct RegistrationBuilder<E = OsEntropy> {
    tokens: TokenGenerator<E>,
    hasher: PasswordHasher<E>,
}

impl RegistrationBuilder<OsEntropy> {
    /// Builder backed by the OS CSPRNG
    pub fn os(config: &RegistrationConfig) -> Self {
        Self::new(Arc::new(OsEntropy), config)
    }
}

impl<E: EntropySource> RegistrationBuilder<E> {
    /// Token bytes and salts are both drawn from `source`.
    pub fn new(source: Arc<E>, config: &RegistrationConfig) -> Self {
        let mut hasher = PasswordHasher::new(Arc::clone(&source), config.hashing);
        if let Some(pepper) = config.pepper() {
            hasher = hasher.with_pepper(pepper.to_vec());
        }

        Self {
            tokens: TokenGenerator::new(source),
            hasher,
        }
    }

    /// The hasher records are built with, for later verification
    pub fn hasher(&self) -> &PasswordHasher<E> {
        &self.hasher
    }

    /// Build a record ready for the storage collaborator
    ///
    /// ## Errors
    /// - [`EmptyPassword`](crate::RegistrationError::EmptyPassword) before any work is done
    /// - [`EntropySourceFailure`](crate::RegistrationError::EntropySourceFailure) if the token cannot be generated
    /// - [`HashingFailure`](crate::RegistrationError::HashingFailure) if the password cannot be hashed
    pub fn build(
        &self,
        username: impl Into<String>,
        password: String,
        email: impl Into<String>,
    ) -> RegistrationResult<RegistrationRecord> {
        let clear_text = ClearTextPassword::new(password)?;

        let token = RegistrationToken::generate(&self.tokens)?;
        let password = UserPassword::from_clear_text(&self.hasher, &clear_text)?;

        Ok(RegistrationRecord::new(
            username.into(),
            password,
            email.into(),
            token,
        ))
    }
}

#[cfg(test)]
mod tests {
    use platform::crypto::testing::{ExhaustingEntropy, FailingEntropy};

    use super::*;
    use crate::error::RegistrationError;

    fn dev_builder() -> RegistrationBuilder {
        RegistrationBuilder::os(&RegistrationConfig::development())
    }

    #[test]
    fn test_build_populates_fields() {
        let record = dev_builder()
            .build("bob", "s3cret!".to_string(), "bob@example.com")
            .unwrap();

        assert_eq!(record.username(), "bob");
        assert_eq!(record.email(), "bob@example.com");
        assert!(record.id().is_none());
        assert_eq!(record.token().as_str().len(), 64);
    }

    #[test]
    fn test_build_is_not_idempotent() {
        let builder = dev_builder();
        let a = builder.build("bob", "s3cret!".to_string(), "bob@example.com").unwrap();
        let b = builder.build("bob", "s3cret!".to_string(), "bob@example.com").unwrap();

        assert_ne!(a.token(), b.token());
        assert_ne!(a.password(), b.password());
    }

    #[test]
    fn test_empty_password_rejected_before_entropy_use() {
        let builder = RegistrationBuilder::new(
            Arc::new(FailingEntropy),
            &RegistrationConfig::development(),
        );
        let result = builder.build("bob", String::new(), "bob@example.com");
        assert!(matches!(result, Err(RegistrationError::EmptyPassword)));
    }

    #[test]
    fn test_salt_failure_after_token_is_hashing_failure() {
        // One fill for the token, none left for the salt.
        let builder = RegistrationBuilder::new(
            Arc::new(ExhaustingEntropy::new(1)),
            &RegistrationConfig::development(),
        );
        let result = builder.build("bob", "s3cret!".to_string(), "bob@example.com");
        assert!(matches!(result, Err(RegistrationError::HashingFailure(_))));
    }

    #[test]
    fn test_pepper_is_applied() {
        let config = RegistrationConfig {
            password_pepper: Some(b"pepper".to_vec()),
            ..RegistrationConfig::development()
        };
        let peppered = RegistrationBuilder::os(&config);
        let record = peppered
            .build("bob", "s3cret!".to_string(), "bob@example.com")
            .unwrap();

        let password = ClearTextPassword::new("s3cret!".to_string()).unwrap();
        assert!(record.password().verify(peppered.hasher(), &password).unwrap());
        assert!(!record.password().verify(dev_builder().hasher(), &password).unwrap());
    }
}
