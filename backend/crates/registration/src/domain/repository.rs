//! Repository Traits
//!
//! Interface to the storage collaborator. No implementation lives in this
//! crate; the host service provides one for its document store.

use kernel::id::RegistrationId;

use crate::domain::entity::registration::RegistrationRecord;
use crate::error::RegistrationResult;

/// Registration repository trait
#[trait_variant::make(RegistrationRepository: Send)]
pub trait LocalRegistrationRepository {
    /// Store a new record and return the identifier the store assigned.
    ///
    /// Implementations map their own failures to
    /// [`RegistrationError::Persistence`](crate::error::RegistrationError::Persistence).
    async fn insert(&self, record: &RegistrationRecord) -> RegistrationResult<RegistrationId>;
}
