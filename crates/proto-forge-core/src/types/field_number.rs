use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProtoError;

/// A positive field number (>= 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FieldNumber(u32);

impl FieldNumber {
    /// Creates a new `FieldNumber`, returning an error if `n` is 0.
    pub fn new(n: u32) -> Result<Self, ProtoError> {
        if n == 0 {
            return Err(ProtoError::InvalidFieldNumber(n));
        }
        Ok(Self(n))
    }

    /// Returns the inner number.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FieldNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<FieldNumber> for u32 {
    fn from(n: FieldNumber) -> u32 {
        n.0
    }
}

impl TryFrom<u32> for FieldNumber {
    type Error = ProtoError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}
