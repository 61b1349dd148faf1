// src/application/services/entry_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::entry::Entry;
use crate::domain::tag_record::TagRecord;

/// Partial update of an entry: only present fields are applied.
#[derive(Debug, Clone, Default)]
pub struct EntryChanges {
    pub text: Option<String>,
    pub tags: Option<TagRecord>,
    pub is_expanded: Option<bool>,
}

impl EntryChanges {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.tags.is_none() && self.is_expanded.is_none()
    }
}

/// Application service for the entry lifecycle: create, list, partial
/// update, trash, restore, permanent delete.
pub trait EntryService: Send + Sync {
    /// Create a new active entry. `tags` is the extractor output; `None`
    /// saves an empty record (the degraded path when extraction failed).
    fn add_entry(&self, text: &str, tags: Option<TagRecord>) -> ApplicationResult<Entry>;

    fn get_entry(&self, id: i32) -> ApplicationResult<Option<Entry>>;

    /// Active entries, newest creation first.
    fn list_active(&self) -> ApplicationResult<Vec<Entry>>;

    /// Trashed entries, most recently deleted first.
    fn list_trashed(&self) -> ApplicationResult<Vec<Entry>>;

    /// Apply the provided fields, refresh the update timestamp, return the
    /// updated record.
    fn update_entry(&self, id: i32, changes: EntryChanges) -> ApplicationResult<Entry>;

    /// Soft delete: set the deletion timestamp.
    fn move_to_trash(&self, id: i32) -> ApplicationResult<Entry>;

    /// Clear the deletion timestamp.
    fn restore(&self, id: i32) -> ApplicationResult<Entry>;

    /// Physically remove the row. Irreversible.
    fn delete_permanently(&self, id: i32) -> ApplicationResult<bool>;
}
