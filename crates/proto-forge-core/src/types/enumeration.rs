use serde::{Deserialize, Serialize};

/// An enum declaration. Variants keep their declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,
    #[serde(default)]
    pub variants: Vec<EnumVariant>,
    /// Permits several variants to share one number.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_alias: bool,
}

/// A single `NAME = number` enum entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumVariant {
    pub name: String,
    pub number: i32,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
            allow_alias: false,
        }
    }

    pub fn with_variant(mut self, name: impl Into<String>, number: i32) -> Self {
        self.variants.push(EnumVariant {
            name: name.into(),
            number,
        });
        self
    }

    pub fn allow_alias(mut self) -> Self {
        self.allow_alias = true;
        self
    }
}
