use serde::{Deserialize, Serialize};

use super::scalar_type::ScalarType;

/// The type of a field: a scalar, a reference to another type, or a map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum FieldType {
    Scalar(ScalarType),
    /// A message or enum reference, kept exactly as resolved upstream.
    Named(String),
    Map {
        key: MapKey,
        value: Box<FieldType>,
    },
}

/// Key type of a map field. Keys are never maps themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum MapKey {
    Scalar(ScalarType),
    Named(String),
}

impl FieldType {
    pub fn named(reference: impl Into<String>) -> Self {
        Self::Named(reference.into())
    }

    pub fn map(key: MapKey, value: FieldType) -> Self {
        Self::Map {
            key,
            value: Box::new(value),
        }
    }
}

impl MapKey {
    pub fn named(reference: impl Into<String>) -> Self {
        Self::Named(reference.into())
    }
}

impl From<ScalarType> for FieldType {
    fn from(scalar: ScalarType) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<ScalarType> for MapKey {
    fn from(scalar: ScalarType) -> Self {
        Self::Scalar(scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_json_shape() {
        let ft = FieldType::Scalar(ScalarType::String);
        let json = serde_json::to_string(&ft).unwrap();
        assert_eq!(json, r#"{"type":"scalar","data":"string"}"#);
    }

    #[test]
    fn nested_map_serde_roundtrip() {
        let ft = FieldType::map(
            ScalarType::String.into(),
            FieldType::map(MapKey::named("Key"), FieldType::named("pkg.Value")),
        );
        let json = serde_json::to_string(&ft).unwrap();
        let back: FieldType = serde_json::from_str(&json).unwrap();
        assert_eq!(ft, back);
    }

    #[test]
    fn map_key_rejects_map() {
        let json = r#"{"type":"map","data":{"key":{"type":"scalar","data":"int32"},"value":{"type":"scalar","data":"bool"}}}"#;
        assert!(serde_json::from_str::<MapKey>(json).is_err());
    }
}
