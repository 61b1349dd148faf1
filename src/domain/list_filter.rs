// src/domain/list_filter.rs
use std::fmt;
use std::str::FromStr;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::tag_record::{TagField, TagRecord, TagValue};

/// Single-select tag filter: one (field, value) pair or nothing.
///
/// Selecting the value that is already active toggles the filter off, so
/// the client never holds more than one filter at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilter {
    pub field: TagField,
    pub value: TagValue,
}

impl ListFilter {
    pub fn new(field: TagField, value: TagValue) -> Self {
        Self { field, value }
    }

    /// An entry's tag record matches iff its value for the selected field
    /// equals the filter value. Boolean equality for the task flag, string
    /// equality otherwise; an absent field never matches.
    pub fn matches(&self, tags: &TagRecord) -> bool {
        tags.value_of(self.field).as_ref() == Some(&self.value)
    }

    /// Single-select toggle: selecting the active filter clears it, any
    /// other selection replaces it.
    pub fn toggled(current: Option<ListFilter>, selected: ListFilter) -> Option<ListFilter> {
        match current {
            Some(active) if active == selected => None,
            _ => Some(selected),
        }
    }
}

impl fmt::Display for ListFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field, self.value)
    }
}

impl FromStr for ListFilter {
    type Err = DomainError;

    /// Parse the CLI form `field=value`, e.g. `person=张三` or `todo=true`.
    fn from_str(s: &str) -> DomainResult<Self> {
        let (field_str, value_str) = s.split_once('=').ok_or_else(|| {
            DomainError::InvalidFilter(format!("expected field=value, got '{}'", s))
        })?;

        let field = field_str.parse::<TagField>()?;
        let value = match field {
            TagField::Todo => {
                let flag = value_str.trim().parse::<bool>().map_err(|_| {
                    DomainError::InvalidFilter(format!(
                        "todo filter takes true or false, got '{}'",
                        value_str
                    ))
                })?;
                TagValue::Flag(flag)
            }
            _ => {
                if value_str.trim().is_empty() {
                    return Err(DomainError::InvalidFilter(
                        "filter value cannot be empty".to_string(),
                    ));
                }
                TagValue::Text(value_str.trim().to_string())
            }
        };

        Ok(ListFilter::new(field, value))
    }
}
