//! Random Token Generation
//!
//! Opaque identifiers made of [`TOKEN_BYTES`] random bytes rendered as
//! lowercase hex. A failing source is fatal: there is no retry and no
//! fallback to a weaker generator.

use std::sync::Arc;

use crate::crypto::{EntropyError, EntropySource, OsEntropy, random_bytes, to_hex};

/// Raw entropy per token (256 bits)
pub const TOKEN_BYTES: usize = 32;

/// Hex-encoded token length
pub const TOKEN_HEX_LEN: usize = TOKEN_BYTES * 2;

/// Generates hex tokens from an injected entropy source
pub struct TokenGenerator<E = OsEntropy> {
    source: Arc<E>,
}

impl TokenGenerator<OsEntropy> {
    /// Generator backed by the OS CSPRNG
    pub fn os() -> Self {
        Self::new(Arc::new(OsEntropy))
    }
}

impl<E: EntropySource> TokenGenerator<E> {
    pub fn new(source: Arc<E>) -> Self {
        Self { source }
    }

    /// Read exactly [`TOKEN_BYTES`] bytes and hex-encode them
    pub fn generate(&self) -> Result<String, EntropyError> {
        let bytes = random_bytes(self.source.as_ref(), TOKEN_BYTES)?;
        Ok(to_hex(&bytes))
    }
}

/// Whether `s` has the shape of a generated token
pub fn is_valid_token(s: &str) -> bool {
    s.len() == TOKEN_HEX_LEN && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::crypto::testing::{FailingEntropy, SeededEntropy};

    #[test]
    fn test_generate_format() {
        let token = TokenGenerator::os().generate().unwrap();
        assert_eq!(token.len(), 64);
        assert!(is_valid_token(&token));
    }

    #[test]
    fn test_no_collisions_in_ten_thousand_samples() {
        let generator = TokenGenerator::os();
        let mut seen = HashSet::with_capacity(10_000);
        for _ in 0..10_000 {
            assert!(seen.insert(generator.generate().unwrap()));
        }
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let a = TokenGenerator::new(Arc::new(SeededEntropy::new(42)))
            .generate()
            .unwrap();
        let b = TokenGenerator::new(Arc::new(SeededEntropy::new(42)))
            .generate()
            .unwrap();
        assert_eq!(a, b);
        assert!(is_valid_token(&a));
    }

    #[test]
    fn test_failing_source_yields_no_token() {
        let result = TokenGenerator::new(Arc::new(FailingEntropy)).generate();
        assert!(matches!(result, Err(EntropyError::Unavailable(_))));
    }

    #[test]
    fn test_is_valid_token_rejects_bad_shapes() {
        assert!(!is_valid_token(""));
        assert!(!is_valid_token(&"a".repeat(63)));
        assert!(!is_valid_token(&"a".repeat(65)));
        assert!(!is_valid_token(&"A".repeat(64)));
        assert!(!is_valid_token(&"g".repeat(64)));
        assert!(is_valid_token(&"0f".repeat(32)));
    }
}
