use serde::{Deserialize, Serialize};

use super::field_number::FieldNumber;
use super::field_type::FieldType;

/// A message field: `[repeated] <type> <name> = <number>;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub number: FieldNumber,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub repeated: bool,
}

impl Field {
    /// Creates a new singular field.
    pub fn new(name: impl Into<String>, field_type: impl Into<FieldType>, number: FieldNumber) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            number,
            repeated: false,
        }
    }

    /// Marks this field as repeated.
    pub fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }
}
