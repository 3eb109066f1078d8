//! Opaque ID Types
//!
//! Type-safe wrappers for identifiers that a storage layer assigns on
//! insert (document keys, row ids). This crate never generates them.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed opaque ID
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type RegistrationId = Id<markers::Registration>;
///
/// let id = RegistrationId::new("65f1c0ffee");
/// assert_eq!(id.as_str(), "65f1c0ffee");
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    /// Wrap a storage-assigned identifier
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_inner(self) -> String {
        self.value
    }
}

// Manual impls: derives would demand the marker type implement them too.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for registration record IDs
    pub struct Registration;
}

pub type RegistrationId = Id<markers::Registration>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrips_as_plain_string() {
        let id = RegistrationId::new("65f1c0ffee00000000000001");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"65f1c0ffee00000000000001\"");

        let back: RegistrationId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_clone_without_marker_bounds() {
        let id = RegistrationId::new("abc");
        let copy = id.clone();
        assert_eq!(copy.as_str(), "abc");
        assert_eq!(format!("{:?}", copy), "Id(abc)");
        assert_eq!(copy.into_inner(), "abc");
    }
}
