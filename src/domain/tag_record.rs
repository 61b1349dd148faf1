// src/domain/tag_record.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::{DomainError, DomainResult};

/// Derived metadata attached to an entry.
///
/// All four fields are independent and optional; "absent" is the only
/// default. The record is stored denormalized on the entry row as JSON and
/// travels unchanged over the wire. Unknown fields coming back from the
/// model are dropped on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    /// Set when the text couples an explicit time reference with an action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<bool>,

    /// Name, role, or group mentioned in the text, verbatim and short.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,

    /// Explicit temporal expression, relative or absolute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Named application, website, or product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
}

impl TagRecord {
    pub fn is_empty(&self) -> bool {
        self.todo.is_none()
            && self.person.is_none()
            && self.time.is_none()
            && self.product.is_none()
    }

    /// The value stored under a given field, if present.
    pub fn value_of(&self, field: TagField) -> Option<TagValue> {
        match field {
            TagField::Todo => self.todo.map(TagValue::Flag),
            TagField::Person => self.person.clone().map(TagValue::Text),
            TagField::Time => self.time.clone().map(TagValue::Text),
            TagField::Product => self.product.clone().map(TagValue::Text),
        }
    }

    /// Parse the JSON column representation. Empty input means "no tags".
    pub fn from_storage(raw: &str) -> DomainResult<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| DomainError::DeserializationError(e.to_string()))
    }

    /// Serialize for the JSON column.
    pub fn to_storage(&self) -> DomainResult<String> {
        serde_json::to_string(self).map_err(|e| DomainError::SerializationError(e.to_string()))
    }
}

/// The four tag dimensions an entry can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Todo,
    Person,
    Time,
    Product,
}

impl fmt::Display for TagField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagField::Todo => write!(f, "todo"),
            TagField::Person => write!(f, "person"),
            TagField::Time => write!(f, "time"),
            TagField::Product => write!(f, "product"),
        }
    }
}

impl FromStr for TagField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "todo" => Ok(TagField::Todo),
            "person" => Ok(TagField::Person),
            "time" => Ok(TagField::Time),
            "product" => Ok(TagField::Product),
            other => Err(DomainError::InvalidFilter(format!(
                "unknown tag field '{}', expected one of: todo, person, time, product",
                other
            ))),
        }
    }
}

/// A concrete tag value: boolean for the task flag, string for the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    Flag(bool),
    Text(String),
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Flag(b) => write!(f, "{}", b),
            TagValue::Text(s) => write!(f, "{}", s),
        }
    }
}
