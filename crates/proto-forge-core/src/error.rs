use std::fmt;

/// Errors that occur when constructing tree values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProtoError {
    /// Field numbers start at 1.
    InvalidFieldNumber(u32),
    /// Reserved range with start > end.
    InvalidReservedRange { start: u32, end: u32 },
    /// Oneof declared without members.
    EmptyOneOf(String),
}

impl fmt::Display for ProtoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFieldNumber(n) => {
                write!(f, "invalid field number {n}: must be >= 1")
            }
            Self::InvalidReservedRange { start, end } => {
                write!(f, "invalid reserved range: start ({start}) > end ({end})")
            }
            Self::EmptyOneOf(name) => {
                write!(f, "oneof '{name}' must have at least one member")
            }
        }
    }
}

impl std::error::Error for ProtoError {}
