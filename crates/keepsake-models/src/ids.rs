//! Type-safe ID wrappers for Keepsake.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate ID newtypes with common functionality.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an ID from an existing string (imported data, fixtures).
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Returns the inner string.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns true if the ID is empty or only whitespace.
            ///
            /// Such records carry no usable identity.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(MemoryId);
define_id!(PhotoId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_string() {
        let id = MemoryId::from_string("2");
        assert_eq!(id.as_str(), "2");
        assert_eq!(id, MemoryId::from("2"));
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id = MemoryId::from_string("42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"42\"");

        let parsed: MemoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_blank_id() {
        assert!(MemoryId::from_string("").is_blank());
        assert!(MemoryId::from_string("   ").is_blank());
        assert!(!MemoryId::from_string("1").is_blank());
    }

    #[test]
    fn test_id_display() {
        let id = PhotoId::from_string("p1");
        assert_eq!(format!("{}", id), "p1");
    }
}
