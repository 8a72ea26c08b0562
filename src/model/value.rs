//! Option values carried by prompt module configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A configuration option value.
///
/// The closed set of shapes an option may take in a resource document.
/// Values are deserialised into this enum once at document load; the
/// emitters pattern-match over the variants, so there is no runtime type
/// inspection and no stringified fallback.
///
/// # Examples
///
/// ```
/// use termrig::model::OptionValue;
///
/// let v = OptionValue::Float(12.0);
/// assert!(matches!(v, OptionValue::Float(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Floating-point literal.
    Float(f64),
    /// String, possibly containing `${theme.<name>}` placeholders.
    String(String),
    /// Ordered list of values.
    List(Vec<OptionValue>),
    /// String-keyed nested mapping.
    Table(BTreeMap<String, OptionValue>),
}

impl OptionValue {
    /// Return the string content if this value is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn yaml_scalar_shapes_deserialize() {
        let v: OptionValue = serde_yaml::from_str("true").unwrap();
        assert_eq!(v, OptionValue::Bool(true));

        let v: OptionValue = serde_yaml::from_str("12").unwrap();
        assert_eq!(v, OptionValue::Int(12));

        let v: OptionValue = serde_yaml::from_str("12.5").unwrap();
        assert_eq!(v, OptionValue::Float(12.5));

        let v: OptionValue = serde_yaml::from_str("\"hello\"").unwrap();
        assert_eq!(v, OptionValue::String("hello".to_string()));
    }

    #[test]
    fn yaml_list_deserializes_mixed() {
        let v: OptionValue = serde_yaml::from_str("[1, \"x\", true]").unwrap();
        let OptionValue::List(items) = v else {
            panic!("expected a list");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], OptionValue::Int(1));
        assert_eq!(items[1], OptionValue::String("x".to_string()));
        assert_eq!(items[2], OptionValue::Bool(true));
    }

    #[test]
    fn yaml_mapping_deserializes_as_table() {
        let v: OptionValue = serde_yaml::from_str("macos: \"\u{f179}\"\nubuntu: \"\u{f31b}\"").unwrap();
        let OptionValue::Table(map) = v else {
            panic!("expected a table");
        };
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("macos"));
    }

    #[test]
    fn as_str_only_matches_strings() {
        assert_eq!(
            OptionValue::String("x".to_string()).as_str(),
            Some("x")
        );
        assert_eq!(OptionValue::Int(3).as_str(), None);
    }
}
