//! Contact record stored in the hash table

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name (the table key) and a phone number (the value)
///
/// The name is fixed once the contact is created; only the number changes
/// when the same name is inserted again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: String,
    number: String,
}

impl Contact {
    /// Create a new contact
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    /// Replace the phone number, keeping the name
    pub fn set_number(&mut self, number: impl Into<String>) {
        self.number = number.into();
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.number)
    }
}
