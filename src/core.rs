//! # Core
//!
//! Serde helpers for JSON shapes used throughout DID documents.

use serde::{Deserialize, Serialize};

/// `Kind` allows serde to serialize/deserialize a string or an object.
///
/// Verification relationships, for example, may reference a verification
/// method by id or embed it inline.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Kind<T> {
    /// Simple string value
    String(String),

    /// Complex object value
    Object(T),
}

impl<T: Default> Default for Kind<T> {
    fn default() -> Self {
        Self::String(String::new())
    }
}

impl<T> Kind<T> {
    /// Returns the string value, if the `Kind` is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Object(_) => None,
        }
    }
}

/// `OneMany` allows serde to serialize/deserialize a single object or a set
/// of objects.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OneMany<T> {
    /// Single object
    One(T),

    /// Set of objects
    Many(Vec<T>),
}

impl<T: Default> Default for OneMany<T> {
    fn default() -> Self {
        Self::One(T::default())
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn kind_untagged() {
        let kind: Kind<serde_json::Value> = Kind::String("#inbox".into());
        assert_eq!(serde_json::to_value(&kind).unwrap(), json!("#inbox"));
        assert_eq!(kind.as_str(), Some("#inbox"));
    }

    #[test]
    fn one_many_untagged() {
        let one = OneMany::One("https://agent.example.com".to_string());
        assert_eq!(serde_json::to_value(&one).unwrap(), json!("https://agent.example.com"));

        let many = OneMany::Many(vec!["https://a.example".to_string(), "https://b.example".into()]);
        assert_eq!(
            serde_json::to_value(&many).unwrap(),
            json!(["https://a.example", "https://b.example"])
        );
    }
}
