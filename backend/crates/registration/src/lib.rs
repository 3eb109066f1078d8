//! Registration Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Registration record, value objects, repository trait
//! - `application/` - Record builder, register use case, configuration
//!
//! ## Security Model
//! - Passwords hashed with Argon2id into self-describing PHC strings
//! - Registration tokens are 32 bytes from a CSPRNG, hex encoded
//! - Entropy is injected, never read from a hidden global
//! - Plaintext passwords are zeroized and never logged
//!
//! Storage, transport and input validation belong to the host service;
//! it implements [`RegistrationRepository`] and validates identity fields.

pub mod application;
pub mod domain;
pub mod error;


// Re-exports for convenience
pub use application::{
    builder::RegistrationBuilder,
    config::{ConfigError, RegistrationConfig},
    register::{RegisterInput, RegisterOutput, RegisterUseCase},
};
pub use domain::entity::registration::RegistrationRecord;
pub use domain::repository::RegistrationRepository;
pub use domain::value_object::{registration_token::RegistrationToken, user_password::UserPassword};
pub use error::{RegistrationError, RegistrationResult};

// Re-export kernel types used in public signatures
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
pub use kernel::id::RegistrationId;
