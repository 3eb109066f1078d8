//! User Password Value Object
//!
//! Stored form of a registered password. Delegates to `platform::password`
//! for the PHC string; adds the serde shape used by the record.

use std::fmt;

use platform::crypto::EntropySource;
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordHasher,
};
use serde::{Deserialize, Serialize};

/// Hashed user password for storage
///
/// Serialized as the bare PHC string; deserialization rejects anything
/// that does not parse as one.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a clear text password
    pub fn from_clear_text<E: EntropySource>(
        hasher: &PasswordHasher<E>,
        password: &ClearTextPassword,
    ) -> Result<Self, PasswordHashError> {
        hasher.hash(password).map(Self)
    }

    /// Create from PHC string (from storage)
    pub fn from_phc_string(phc_string: impl Into<String>) -> Result<Self, PasswordHashError> {
        HashedPassword::from_phc_string(phc_string).map(Self)
    }

    /// Get PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a clear text password against this hash
    ///
    /// `hasher` must carry the same pepper that was used when hashing;
    /// its cost parameters do not matter.
    pub fn verify<E: EntropySource>(
        &self,
        hasher: &PasswordHasher<E>,
        password: &ClearTextPassword,
    ) -> Result<bool, PasswordHashError> {
        hasher.verify(password, self.as_phc_string())
    }
}

impl TryFrom<String> for UserPassword {
    type Error = PasswordHashError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        HashedPassword::try_from(s).map(Self)
    }
}

impl From<UserPassword> for String {
    fn from(password: UserPassword) -> Self {
        password.0.into()
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}

#[cfg(test)]
mod tests {
    use platform::password::HashingConfig;

    use super::*;

    fn clear(s: &str) -> ClearTextPassword {
        ClearTextPassword::new(s.to_string()).unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::os(HashingConfig::development());
        let hashed = UserPassword::from_clear_text(&hasher, &clear("TestPassword123!")).unwrap();

        assert!(hashed.verify(&hasher, &clear("TestPassword123!")).unwrap());
        assert!(!hashed.verify(&hasher, &clear("WrongPassword123!")).unwrap());
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let hasher = PasswordHasher::os(HashingConfig::development());
        let hashed = UserPassword::from_clear_text(&hasher, &clear("TestPassword123!")).unwrap();

        let restored = UserPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&hasher, &clear("TestPassword123!")).unwrap());
    }

    #[test]
    fn test_serde_as_bare_phc_string() {
        let hasher = PasswordHasher::os(HashingConfig::development());
        let hashed = UserPassword::from_clear_text(&hasher, &clear("TestPassword123!")).unwrap();

        let json = serde_json::to_string(&hashed).unwrap();
        assert_eq!(json, format!("\"{}\"", hashed.as_phc_string()));

        let back: UserPassword = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hashed);
        assert!(back.verify(&hasher, &clear("TestPassword123!")).unwrap());
    }

    #[test]
    fn test_deserialize_rejects_non_phc() {
        let bad: Result<UserPassword, _> = serde_json::from_str("\"hunter2\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_display_and_debug_redaction() {
        let hasher = PasswordHasher::os(HashingConfig::development());
        let hashed = UserPassword::from_clear_text(&hasher, &clear("SecretPassword123!")).unwrap();

        assert_eq!(hashed.to_string(), "[HASHED_PASSWORD]");
        assert!(format!("{:?}", hashed).contains("[HASH]"));
    }
}
