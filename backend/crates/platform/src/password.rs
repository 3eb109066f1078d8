//! Password Hashing and Verification
//!
//! Argon2id hashing with self-describing PHC string output:
//! - Memory-hard hashing (Argon2id, version 0x13)
//! - Fresh random salt per hash, drawn from an injected [`EntropySource`]
//! - Parameters embedded in the output, so verification needs no
//!   out-of-band configuration and parameters can be raised later
//! - Zeroization of clear text and peppered buffers
//!
//! Password *policy* (length, charset, breach checks) is not enforced
//! here; callers validate before constructing a [`ClearTextPassword`].

use std::fmt;
use std::sync::Arc;

use argon2::password_hash::{self, SaltString};
use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher as _, PasswordVerifier as _, Version,
};
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::crypto::{EntropySource, OsEntropy};

/// Salt length in bytes (128 bits)
pub const SALT_BYTES: usize = 16;

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing/verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordHashError {
    /// Clear text was empty
    #[error("Password cannot be empty")]
    EmptyPassword,

    /// Salt generation or the hashing primitive failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored value is not a supported PHC string
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Configuration
// ============================================================================

/// Argon2id cost parameters used for new hashes
///
/// Existing hashes always verify with the parameters embedded in them;
/// this only decides what new hashes look like (and what
/// [`PasswordHasher::needs_rehash`] considers current).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
    /// Derived key length in bytes
    pub output_len: usize,
}

impl Default for HashingConfig {
    /// m=65536 (64 MiB), t=3, p=4, 32-byte key
    fn default() -> Self {
        Self {
            memory_kib: 64 * 1024,
            iterations: 3,
            parallelism: 4,
            output_len: 32,
        }
    }
}

impl HashingConfig {
    /// Cheap parameters for development and tests
    pub fn development() -> Self {
        Self {
            memory_kib: 4 * 1024,
            iterations: 1,
            parallelism: 1,
            output_len: 32,
        }
    }

    fn params(&self) -> Result<Params, PasswordHashError> {
        Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            Some(self.output_len),
        )
        .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap user input; only emptiness is checked.
    pub fn new(raw: String) -> Result<Self, PasswordHashError> {
        if raw.is_empty() {
            return Err(PasswordHashError::EmptyPassword);
        }
        Ok(Self(raw))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// `$argon2id$v=19$m=65536,t=3,p=4$<salt>$<hash>`: algorithm, version,
/// parameters, salt and derived key in one string.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from storage)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();
        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { hash })
    }

    /// Get the PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }
}

impl TryFrom<String> for HashedPassword {
    type Error = PasswordHashError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_phc_string(s)
    }
}

impl From<HashedPassword> for String {
    fn from(hashed: HashedPassword) -> Self {
        hashed.hash
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Hasher
// ============================================================================

/// Argon2id hasher with an injected salt source
///
/// ## Examples
/// ```rust
/// use platform::password::{ClearTextPassword, HashingConfig, PasswordHasher};
///
/// let hasher = PasswordHasher::os(HashingConfig::development());
/// let password = ClearTextPassword::new("correct-horse".to_string()).unwrap();
/// let hashed = hasher.hash(&password).unwrap();
///
/// assert!(hashed.as_phc_string().starts_with("$argon2id$"));
/// assert!(hasher.verify(&password, hashed.as_phc_string()).unwrap());
/// ```
pub struct PasswordHasher<E = OsEntropy> {
    source: Arc<E>,
    config: HashingConfig,
    pepper: Option<Zeroizing<Vec<u8>>>,
}

impl PasswordHasher<OsEntropy> {
    /// Hasher drawing salts from the OS CSPRNG
    pub fn os(config: HashingConfig) -> Self {
        Self::new(Arc::new(OsEntropy), config)
    }
}

impl<E: EntropySource> PasswordHasher<E> {
    pub fn new(source: Arc<E>, config: HashingConfig) -> Self {
        Self {
            source,
            config,
            pepper: None,
        }
    }

    /// Mix an application-wide secret into every hash and verification.
    ///
    /// Hashes produced with a pepper only verify with the same pepper.
    pub fn with_pepper(mut self, pepper: Vec<u8>) -> Self {
        self.pepper = Some(Zeroizing::new(pepper));
        self
    }

    pub fn config(&self) -> &HashingConfig {
        &self.config
    }

    /// Hash the password with a fresh random salt
    ///
    /// ## Errors
    /// [`PasswordHashError::HashingFailed`] if the salt source fails or the
    /// configured parameters are rejected by Argon2.
    pub fn hash(&self, password: &ClearTextPassword) -> Result<HashedPassword, PasswordHashError> {
        let mut salt_bytes = [0u8; SALT_BYTES];
        self.source
            .try_fill(&mut salt_bytes)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, self.config.params()?);
        let input = self.peppered(password);

        let hash = argon2
            .hash_password(input.as_slice(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        tracing::debug!(
            m_cost = self.config.memory_kib,
            t_cost = self.config.iterations,
            p_cost = self.config.parallelism,
            "Password hashed"
        );

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }

    /// Verify a password against a stored PHC string
    ///
    /// Algorithm and parameters are read from `encoded`, not from this
    /// hasher's configuration. Argon2 compares in constant time.
    ///
    /// ## Returns
    /// - `Ok(true)` on match, `Ok(false)` on mismatch
    /// - `Err(InvalidHashFormat)` if `encoded` is not a supported PHC string
    pub fn verify(
        &self,
        password: &ClearTextPassword,
        encoded: &str,
    ) -> Result<bool, PasswordHashError> {
        let parsed = PasswordHash::new(encoded).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        let input = self.peppered(password);

        match Argon2::default().verify_password(input.as_slice(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            // Parses as PHC but carries values Argon2 cannot use
            Err(
                password_hash::Error::Algorithm
                | password_hash::Error::Version
                | password_hash::Error::ParamNameInvalid
                | password_hash::Error::ParamNameDuplicated
                | password_hash::Error::ParamValueInvalid(_)
                | password_hash::Error::ParamsMaxExceeded
                | password_hash::Error::SaltInvalid(_)
                | password_hash::Error::OutputSize { .. },
            ) => Err(PasswordHashError::InvalidHashFormat),
            Err(e) => Err(PasswordHashError::HashingFailed(e.to_string())),
        }
    }

    /// Whether `encoded` was produced with other algorithm or parameters
    /// than the current configuration. Unparseable input counts as stale.
    pub fn needs_rehash(&self, encoded: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(encoded) else {
            return true;
        };

        if parsed.algorithm != Algorithm::Argon2id.ident()
            || parsed.version != Some(Version::V0x13 as u32)
        {
            return true;
        }

        let Ok(params) = Params::try_from(&parsed) else {
            return true;
        };
        let output_len = parsed.hash.as_ref().map(|h| h.len());

        params.m_cost() != self.config.memory_kib
            || params.t_cost() != self.config.iterations
            || params.p_cost() != self.config.parallelism
            || output_len != Some(self.config.output_len)
    }

    fn peppered(&self, password: &ClearTextPassword) -> Zeroizing<Vec<u8>> {
        let mut input = Zeroizing::new(password.as_bytes().to_vec());
        if let Some(pepper) = &self.pepper {
            input.extend_from_slice(pepper);
        }
        input
    }
}

// ============================================================================
// Tests
// ============================================================================
