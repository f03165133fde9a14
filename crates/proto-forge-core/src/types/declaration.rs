use std::fmt;

use serde::{Deserialize, Serialize};

use super::enumeration::Enum;
use super::field::Field;
use super::message::Message;
use super::method::Method;
use super::one_of::OneOf;
use super::service::Service;

/// Any named construct in a schema tree.
///
/// The set of kinds is closed: consumers match on it exhaustively, so adding a
/// kind is a compile error at every dispatch site rather than a runtime case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Declaration {
    Message(Message),
    Field(Field),
    OneOf(OneOf),
    Enum(Enum),
    Method(Method),
    Service(Service),
}

/// The tag of a [`Declaration`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Message,
    Field,
    OneOf,
    Enum,
    Method,
    Service,
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Self::Message(_) => DeclarationKind::Message,
            Self::Field(_) => DeclarationKind::Field,
            Self::OneOf(_) => DeclarationKind::OneOf,
            Self::Enum(_) => DeclarationKind::Enum,
            Self::Method(_) => DeclarationKind::Method,
            Self::Service(_) => DeclarationKind::Service,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Message(m) => &m.name,
            Self::Field(f) => &f.name,
            Self::OneOf(o) => &o.name,
            Self::Enum(e) => &e.name,
            Self::Method(m) => &m.name,
            Self::Service(s) => &s.name,
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message => write!(f, "message"),
            Self::Field => write!(f, "field"),
            Self::OneOf => write!(f, "oneof"),
            Self::Enum => write!(f, "enum"),
            Self::Method => write!(f, "method"),
            Self::Service => write!(f, "service"),
        }
    }
}

impl From<Message> for Declaration {
    fn from(m: Message) -> Self {
        Self::Message(m)
    }
}

impl From<Field> for Declaration {
    fn from(f: Field) -> Self {
        Self::Field(f)
    }
}

impl From<OneOf> for Declaration {
    fn from(o: OneOf) -> Self {
        Self::OneOf(o)
    }
}

impl From<Enum> for Declaration {
    fn from(e: Enum) -> Self {
        Self::Enum(e)
    }
}

impl From<Method> for Declaration {
    fn from(m: Method) -> Self {
        Self::Method(m)
    }
}

impl From<Service> for Declaration {
    fn from(s: Service) -> Self {
        Self::Service(s)
    }
}
