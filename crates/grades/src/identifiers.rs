//! Newtype identifiers.
//!
//! Values that only carry identity are wrapped in a distinct newtype so they
//! cannot be swapped with an arbitrary string or integer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Macro for String-wrapped newtypes.
// Generates: struct, new() returning Option<Self>, as_str(), Display.
// Values are trimmed; blank input yields None.
// ---------------------------------------------------------------------------
macro_rules! string_id {
    (
        $(#[$attr:meta])*
        $name:ident
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, returning `None` if the value is blank.
            pub fn new(value: impl Into<String>) -> Option<Self> {
                let v = value.into();
                let trimmed = v.trim();
                if trimmed.is_empty() {
                    None
                } else if trimmed.len() == v.len() {
                    Some(Self(v))
                } else {
                    Some(Self(trimmed.to_owned()))
                }
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id! {
    /// A Passport York account name.
    Username
}

// ---------------------------------------------------------------------------

/// Identifies a single `grades_list` invocation.
///
/// Generated fresh for every run and attached to the root tracing span so all
/// log events from one run can be correlated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    /// Generates a new random run identifier.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_username_is_rejected() {
        assert!(Username::new("").is_none());
        assert!(Username::new("   ").is_none());
    }

    #[test]
    fn test_username_is_trimmed() {
        let name = Username::new("  jdoe\n").unwrap();
        assert_eq!(name.as_str(), "jdoe");
        assert_eq!(name.to_string(), "jdoe");
    }

    #[test]
    fn test_run_ids_are_unique() {
        assert_ne!(RunId::new_random(), RunId::new_random());
    }
}
