// src/application/services/entry_service_impl.rs
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::entry_service::{EntryChanges, EntryService};
use crate::domain::entry::Entry;
use crate::domain::repositories::entry_repository::EntryRepository;
use crate::domain::tag_record::TagRecord;

#[derive(Debug)]
pub struct EntryServiceImpl<R: EntryRepository> {
    repository: Arc<R>,
}

impl<R: EntryRepository> EntryServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self), level = "trace")]
    fn validate_entry_id(&self, id: i32) -> ApplicationResult<()> {
        if id <= 0 {
            return Err(ApplicationError::Validation(format!(
                "Invalid entry ID: {}",
                id
            )));
        }
        Ok(())
    }

    fn require_entry(&self, id: i32) -> ApplicationResult<Entry> {
        self.repository
            .get_by_id(id)?
            .ok_or(ApplicationError::EntryNotFound(id))
    }
}

impl<R: EntryRepository> EntryService for EntryServiceImpl<R> {
    #[instrument(skip(self, tags), level = "debug", fields(text_len = text.len()))]
    fn add_entry(&self, text: &str, tags: Option<TagRecord>) -> ApplicationResult<Entry> {
        if text.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "entry text cannot be empty".to_string(),
            ));
        }

        let mut entry = Entry::new(text, tags.unwrap_or_default())?;
        self.repository.add(&mut entry)?;

        debug!("created entry {:?}", entry.id);
        Ok(entry)
    }

    #[instrument(skip(self), level = "debug")]
    fn get_entry(&self, id: i32) -> ApplicationResult<Option<Entry>> {
        self.validate_entry_id(id)?;
        Ok(self.repository.get_by_id(id)?)
    }

    #[instrument(skip(self), level = "debug")]
    fn list_active(&self) -> ApplicationResult<Vec<Entry>> {
        Ok(self.repository.list_active()?)
    }

    #[instrument(skip(self), level = "debug")]
    fn list_trashed(&self) -> ApplicationResult<Vec<Entry>> {
        Ok(self.repository.list_trashed()?)
    }

    #[instrument(skip(self, changes), level = "debug")]
    fn update_entry(&self, id: i32, changes: EntryChanges) -> ApplicationResult<Entry> {
        self.validate_entry_id(id)?;

        let mut entry = self.require_entry(id)?;

        if let Some(text) = changes.text {
            entry.set_text(&text)?;
        }
        if let Some(tags) = changes.tags {
            entry.set_tags(tags);
        }
        if let Some(expanded) = changes.is_expanded {
            entry.set_expanded(expanded);
        }

        self.repository.update(&entry)?;
        Ok(entry)
    }

    #[instrument(skip(self), level = "debug")]
    fn move_to_trash(&self, id: i32) -> ApplicationResult<Entry> {
        self.validate_entry_id(id)?;

        let mut entry = self.require_entry(id)?;
        entry.move_to_trash();
        self.repository.update(&entry)?;

        debug!("entry {} moved to trash", id);
        Ok(entry)
    }

    #[instrument(skip(self), level = "debug")]
    fn restore(&self, id: i32) -> ApplicationResult<Entry> {
        self.validate_entry_id(id)?;

        let mut entry = self.require_entry(id)?;
        entry.restore();
        self.repository.update(&entry)?;

        debug!("entry {} restored", id);
        Ok(entry)
    }

    #[instrument(skip(self), level = "debug")]
    fn delete_permanently(&self, id: i32) -> ApplicationResult<bool> {
        self.validate_entry_id(id)?;
        let deleted = self.repository.delete_permanently(id)?;
        Ok(deleted)
    }
}
