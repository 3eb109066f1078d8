//! Register Use Case
//!
//! Builds a registration record and hands it to the storage collaborator.

use std::sync::Arc;

use kernel::id::RegistrationId;
use platform::crypto::{EntropySource, OsEntropy};

use crate::application::builder::RegistrationBuilder;
use crate::domain::repository::RegistrationRepository;
use crate::domain::value_object::registration_token::RegistrationToken;
use crate::error::RegistrationResult;

/// Register input (already validated by the request handler)
pub struct RegisterInput {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Register output
#[derive(Debug)]
pub struct RegisterOutput {
    /// Identifier assigned by the store
    pub registration_id: RegistrationId,
    /// Token to deliver to the user out of band
    pub token: RegistrationToken,
}

/// Register use case
pub struct RegisterUseCase<R, E = OsEntropy>
where
    R: RegistrationRepository,
    E: EntropySource,
{
    repo: Arc<R>,
    builder: Arc<RegistrationBuilder<E>>,
}

impl<R, E> RegisterUseCase<R, E>
where
    R: RegistrationRepository,
    E: EntropySource,
{
    pub fn new(repo: Arc<R>, builder: Arc<RegistrationBuilder<E>>) -> Self {
        Self { repo, builder }
    }

    pub async fn execute(&self, input: RegisterInput) -> RegistrationResult<RegisterOutput> {
        let RegisterInput {
            username,
            password,
            email,
        } = input;

        // Nothing reaches the store unless the whole record was built
        let record = self.builder.build(username, password, email)?;

        let registration_id = self.repo.insert(&record).await?;

        tracing::info!(
            registration_id = %registration_id,
            username = %record.username(),
            "User registered"
        );

        Ok(RegisterOutput {
            registration_id,
            token: record.token().clone(),
        })
    }
}
