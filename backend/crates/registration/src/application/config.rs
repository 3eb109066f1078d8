//! Application Configuration
//!
//! Configuration for the Registration application layer.

use std::fmt;

use platform::crypto::from_base64;
use thiserror::Error;

/// Re-export hashing parameters from platform
pub use platform::password::HashingConfig;

/// Environment variable holding the optional pepper (standard base64)
pub const PEPPER_ENV: &str = "REGISTRATION_PASSWORD_PEPPER";

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("REGISTRATION_PASSWORD_PEPPER is not valid base64: {0}")]
    InvalidPepper(String),
}

/// Registration application configuration
#[derive(Clone, Default)]
pub struct RegistrationConfig {
    /// Argon2id parameters for new hashes
    pub hashing: HashingConfig,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl RegistrationConfig {
    /// Create config for development (cheap hashing, no pepper)
    pub fn development() -> Self {
        Self {
            hashing: HashingConfig::development(),
            ..Default::default()
        }
    }

    /// Production defaults plus the pepper from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let password_pepper = match lookup(PEPPER_ENV) {
            Some(encoded) if !encoded.trim().is_empty() => Some(
                from_base64(encoded.trim()).map_err(|e| ConfigError::InvalidPepper(e.to_string()))?,
            ),
            _ => None,
        };

        Ok(Self {
            password_pepper,
            ..Default::default()
        })
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for RegistrationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationConfig")
            .field("hashing", &self.hashing)
            .field(
                "password_pepper",
                &self.password_pepper.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}
