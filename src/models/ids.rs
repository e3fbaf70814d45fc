//! Strongly-typed ID wrappers for all record types
//!
//! The backend uses integer primary keys but the client treats ids as
//! opaque strings. Ids deserialize from JSON numbers or strings; numeric
//! ids serialize back as numbers so request payloads match what the
//! backend expects.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing id
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id.to_string())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self.0.parse::<i64>() {
                    Ok(numeric) => serializer.serialize_i64(numeric),
                    Err(_) => serializer.serialize_str(&self.0),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
            }
        }
    };
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Number(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

define_id!(AccountId);
define_id!(CategoryId);
define_id!(ExpenseId);
define_id!(IncomeId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_number_or_string() {
        let numeric: AccountId = serde_json::from_str("42").unwrap();
        let text: AccountId = serde_json::from_str("\"abc\"").unwrap();

        assert_eq!(numeric.as_str(), "42");
        assert_eq!(text.to_string(), "abc");
    }

    #[test]
    fn test_numeric_ids_serialize_as_numbers() {
        assert_eq!(serde_json::to_string(&CategoryId::from(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&CategoryId::from("food")).unwrap(),
            "\"food\""
        );
    }
}
