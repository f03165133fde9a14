use serde::{Deserialize, Serialize};

use super::declaration::Declaration;
use crate::error::ProtoError;

/// A oneof group. Always has at least one member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOneOf")]
pub struct OneOf {
    pub name: String,
    pub declarations: Vec<Declaration>,
}

impl OneOf {
    /// Creates a oneof, rejecting an empty member list.
    pub fn new(
        name: impl Into<String>,
        declarations: Vec<Declaration>,
    ) -> Result<Self, ProtoError> {
        let name = name.into();
        if declarations.is_empty() {
            return Err(ProtoError::EmptyOneOf(name));
        }
        Ok(Self { name, declarations })
    }
}

#[derive(Deserialize)]
struct RawOneOf {
    name: String,
    declarations: Vec<Declaration>,
}

impl TryFrom<RawOneOf> for OneOf {
    type Error = ProtoError;

    fn try_from(raw: RawOneOf) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.declarations)
    }
}
