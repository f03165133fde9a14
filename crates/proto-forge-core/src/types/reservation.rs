use serde::{Deserialize, Serialize};

use crate::error::ProtoError;

/// A reserved field number, inclusive number range, or field name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "value",
    rename_all = "lowercase",
    try_from = "RawReservation"
)]
pub enum Reservation {
    Number(u32),
    Range { start: u32, end: u32 },
    Name(String),
}

impl Reservation {
    /// Creates an inclusive range, rejecting `start > end`.
    pub fn range(start: u32, end: u32) -> Result<Self, ProtoError> {
        if start > end {
            return Err(ProtoError::InvalidReservedRange { start, end });
        }
        Ok(Self::Range { start, end })
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// True for single numbers and ranges.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Range { .. })
    }
}

/// Unchecked wire form; converted through [`Reservation::range`].
#[derive(Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
enum RawReservation {
    Number(u32),
    Range { start: u32, end: u32 },
    Name(String),
}

impl TryFrom<RawReservation> for Reservation {
    type Error = ProtoError;

    fn try_from(raw: RawReservation) -> Result<Self, Self::Error> {
        match raw {
            RawReservation::Number(n) => Ok(Self::Number(n)),
            RawReservation::Range { start, end } => Self::range(start, end),
            RawReservation::Name(name) => Ok(Self::Name(name)),
        }
    }
}
