// src/domain/entry.rs
use chrono::{DateTime, Utc};
use derive_builder::Builder;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::tag_record::TagRecord;

/// Lifecycle state derived from the deletion timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    Active,
    Trashed,
}

/// A todo/notes entry.
///
/// The text body is non-empty and trimmed; tags are derived, never
/// user-authored, and stored denormalized on the entry. `deleted_at` is the
/// soft-delete marker: `None` means active, `Some` means in the trash.
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(setter(into))]
pub struct Entry {
    pub id: Option<i32>,
    pub text: String,
    #[builder(default)]
    pub tags: TagRecord,
    #[builder(default = "false")]
    pub is_expanded: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[builder(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entry {
    /// Create a new active entry from a user submission.
    pub fn new<S: AsRef<str>>(text: S, tags: TagRecord) -> DomainResult<Self> {
        let text = Self::validate_text(text.as_ref())?;
        let now = Utc::now();

        Ok(Self {
            id: None,
            text,
            tags,
            is_expanded: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// Rebuild an entry from its storage representation.
    #[allow(clippy::too_many_arguments)]
    pub fn from_storage(
        id: i32,
        text: String,
        tags: TagRecord,
        is_expanded: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Some(id),
            text,
            tags,
            is_expanded,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    fn validate_text(text: &str) -> DomainResult<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidEntry(
                "entry text cannot be empty".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }

    pub fn state(&self) -> EntryState {
        if self.deleted_at.is_some() {
            EntryState::Trashed
        } else {
            EntryState::Active
        }
    }

    pub fn is_trashed(&self) -> bool {
        self.state() == EntryState::Trashed
    }

    /// Replace the text body, keeping the trimming/non-empty rules.
    pub fn set_text<S: AsRef<str>>(&mut self, text: S) -> DomainResult<()> {
        self.text = Self::validate_text(text.as_ref())?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Replace the derived tag record.
    pub fn set_tags(&mut self, tags: TagRecord) {
        self.tags = tags;
        self.updated_at = Utc::now();
    }

    pub fn set_expanded(&mut self, expanded: bool) {
        self.is_expanded = expanded;
        self.updated_at = Utc::now();
    }

    /// Mark the entry as trashed. Re-deleting a trashed entry keeps the
    /// original deletion timestamp so trash ordering stays stable.
    pub fn move_to_trash(&mut self) {
        if self.deleted_at.is_none() {
            self.deleted_at = Some(Utc::now());
            self.updated_at = Utc::now();
        }
    }

    /// Clear the deletion timestamp; no-op on an active entry.
    pub fn restore(&mut self) {
        if self.deleted_at.is_some() {
            self.deleted_at = None;
            self.updated_at = Utc::now();
        }
    }

    /// Set the ID (typically used after storage).
    pub fn set_id(&mut self, id: i32) {
        self.id = Some(id);
    }
}
