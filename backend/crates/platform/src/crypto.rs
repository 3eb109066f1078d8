//! Cryptographic Utilities
//!
//! Randomness is modelled as an injected [`EntropySource`] instead of a
//! process-wide global, so callers can substitute a deterministic or
//! failing source in tests. Production code uses [`OsEntropy`].

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};
use thiserror::Error;

/// Random source failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// The source could not supply the requested bytes
    #[error("Entropy source unavailable: {0}")]
    Unavailable(String),
}

/// A cryptographically secure source of random bytes
///
/// Implementations must either fill the whole buffer or return an error.
/// They must never fall back to a weaker generator or leave the buffer
/// zeroed on failure and report success.
pub trait EntropySource: Send + Sync {
    fn try_fill(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// Operating system CSPRNG (`getrandom` under the hood)
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn try_fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| EntropyError::Unavailable(e.to_string()))
    }
}

/// Read exactly `len` random bytes from `source`
pub fn random_bytes<E>(source: &E, len: usize) -> Result<Vec<u8>, EntropyError>
where
    E: EntropySource + ?Sized,
{
    let mut bytes = vec![0u8; len];
    source.try_fill(&mut bytes)?;
    Ok(bytes)
}

/// Encode bytes as lowercase hex
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode standard base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

/// Substitutable sources for tests
#[cfg(any(test, feature = "testing"))]
pub mod testing {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rand::{RngCore, SeedableRng, rngs::OsRng, rngs::StdRng};

    use super::{EntropyError, EntropySource};

    /// Deterministic source; the same seed yields the same byte stream.
    pub struct SeededEntropy {
        rng: Mutex<StdRng>,
    }

    impl SeededEntropy {
        pub fn new(seed: u64) -> Self {
            Self {
                rng: Mutex::new(StdRng::seed_from_u64(seed)),
            }
        }
    }

    impl EntropySource for SeededEntropy {
        fn try_fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| EntropyError::Unavailable("seeded source poisoned".to_string()))?;
            rng.fill_bytes(dest);
            Ok(())
        }
    }

    /// Always fails, as a host with a broken entropy pool would.
    #[derive(Debug, Default)]
    pub struct FailingEntropy;

    impl EntropySource for FailingEntropy {
        fn try_fill(&self, _dest: &mut [u8]) -> Result<(), EntropyError> {
            Err(EntropyError::Unavailable("entropy pool closed".to_string()))
        }
    }

    /// Serves `successes` fills from the OS source, then fails forever.
    #[derive(Debug)]
    pub struct ExhaustingEntropy {
        remaining: AtomicUsize,
    }

    impl ExhaustingEntropy {
        pub fn new(successes: usize) -> Self {
            Self {
                remaining: AtomicUsize::new(successes),
            }
        }
    }

    impl EntropySource for ExhaustingEntropy {
        fn try_fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
            let granted = self
                .remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if !granted {
                return Err(EntropyError::Unavailable("entropy exhausted".to_string()));
            }
            OsRng
                .try_fill_bytes(dest)
                .map_err(|e| EntropyError::Unavailable(e.to_string()))
        }
    }
}
