use serde::{Deserialize, Serialize};

use super::declaration::Declaration;
use super::reservation::Reservation;

/// A message: nested declarations plus reserved numbers and names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub declarations: Vec<Declaration>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reserved: Vec<Reservation>,
}

impl Message {
    /// Creates an empty message.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
            reserved: Vec::new(),
        }
    }

    /// Appends a nested declaration.
    pub fn with_declaration(mut self, declaration: impl Into<Declaration>) -> Self {
        self.declarations.push(declaration.into());
        self
    }

    /// Appends a reservation.
    pub fn with_reserved(mut self, reservation: Reservation) -> Self {
        self.reserved.push(reservation);
        self
    }

    /// True when the message has neither members nor reservations.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty() && self.reserved.is_empty()
    }
}
