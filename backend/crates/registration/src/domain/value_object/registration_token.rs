//! Registration Token Value Object
//!
//! 64 lowercase hex characters encoding 32 bytes from a CSPRNG.
//! Delegates generation to `platform::token`.

use std::fmt;

use platform::crypto::{EntropyError, EntropySource};
use platform::token::{TokenGenerator, is_valid_token};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stored value does not look like a generated token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid registration token format")]
pub struct InvalidTokenFormat;

/// Opaque random token issued with every registration
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegistrationToken(String);

impl RegistrationToken {
    /// Issue a fresh token
    pub fn generate<E: EntropySource>(generator: &TokenGenerator<E>) -> Result<Self, EntropyError> {
        generator.generate().map(Self)
    }

    /// Accept a previously issued token (e.g., from storage or a link)
    pub fn parse(s: impl Into<String>) -> Result<Self, InvalidTokenFormat> {
        let s = s.into();
        if !is_valid_token(&s) {
            return Err(InvalidTokenFormat);
        }
        Ok(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RegistrationToken {
    type Error = InvalidTokenFormat;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<RegistrationToken> for String {
    fn from(token: RegistrationToken) -> Self {
        token.0
    }
}

impl fmt::Debug for RegistrationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegistrationToken").field(&"[TOKEN]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate() {
        let token = RegistrationToken::generate(&TokenGenerator::os()).unwrap();
        assert_eq!(token.as_str().len(), 64);
        assert!(RegistrationToken::parse(token.as_str()).is_ok());
    }

    #[test]
    fn test_parse_rejects_uppercase_and_wrong_length() {
        assert_eq!(
            RegistrationToken::parse("AB".repeat(32)),
            Err(InvalidTokenFormat)
        );
        assert!(RegistrationToken::parse("ab".repeat(31)).is_err());
        assert!(RegistrationToken::parse("").is_err());
    }

    #[test]
    fn test_serde_validates_on_the_way_in() {
        let token = RegistrationToken::parse("0a".repeat(32)).unwrap();
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, format!("\"{}\"", "0a".repeat(32)));

        let back: RegistrationToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);

        let bad: Result<RegistrationToken, _> = serde_json::from_str("\"not-a-token\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let token = RegistrationToken::parse("0a".repeat(32)).unwrap();
        let debug = format!("{:?}", token);
        assert!(debug.contains("[TOKEN]"));
        assert!(!debug.contains("0a0a"));
    }
}
