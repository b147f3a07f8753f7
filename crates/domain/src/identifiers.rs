//! Strongly-typed identifier types for the trivia domain.
//!
//! Identifiers are assigned by storage (serial integer keys), so they wrap an
//! `i32` rather than generating values on their own. Wrapping them keeps a
//! question id from ever being passed where a category id is expected.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw storage key
            #[inline]
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Get the raw storage key
            #[inline]
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }
    };
}

define_id!(QuestionId, "Unique identifier for trivia questions");

define_id!(CategoryId, "Unique identifier for question categories");

impl CategoryId {
    /// Sentinel used by quiz clients to mean "every category"
    pub const ALL: CategoryId = CategoryId(0);

    /// Whether this id is the "every category" sentinel
    #[inline]
    pub fn is_all(&self) -> bool {
        *self == Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_equality() {
        assert_eq!(QuestionId::new(7), QuestionId::from(7));
        assert_ne!(QuestionId::new(7), QuestionId::new(8));
    }

    #[test]
    fn test_id_from_string() {
        let id: CategoryId = " 3 ".parse().unwrap();
        assert_eq!(id.value(), 3);
        assert!("three".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let json = serde_json::to_string(&QuestionId::new(12)).unwrap();
        assert_eq!(json, "12");

        let id: QuestionId = serde_json::from_str("12").unwrap();
        assert_eq!(id, QuestionId::new(12));
    }

    #[test]
    fn test_all_categories_sentinel() {
        assert!(CategoryId::ALL.is_all());
        assert!(CategoryId::new(0).is_all());
        assert!(!CategoryId::new(1).is_all());
    }
}
