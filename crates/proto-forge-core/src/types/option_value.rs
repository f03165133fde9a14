use serde::{Deserialize, Serialize};

/// The value of a file-level option.
///
/// Float values are stored as strings to keep `Eq` and the exact spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum OptionValue {
    String(String),
    Integer(i64),
    Float(String),
    Boolean(bool),
    /// A bare enum constant such as `SPEED`.
    Identifier(String),
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}
