// src/domain/repositories/entry_repository.rs
use crate::domain::entry::Entry;
use crate::domain::error::DomainError;

/// Repository trait for entry persistence.
///
/// Methods speak in domain terms; the soft-delete split (active vs trashed)
/// is part of the contract, the storage mechanism is not.
pub trait EntryRepository: std::fmt::Debug + Send + Sync {
    /// Get an entry by its ID, trashed or not.
    fn get_by_id(&self, id: i32) -> Result<Option<Entry>, DomainError>;

    /// All entries without a deletion timestamp, newest creation first.
    fn list_active(&self) -> Result<Vec<Entry>, DomainError>;

    /// All entries with a deletion timestamp, most recently deleted first.
    fn list_trashed(&self) -> Result<Vec<Entry>, DomainError>;

    /// Insert a new entry; backfills the generated ID.
    fn add(&self, entry: &mut Entry) -> Result<(), DomainError>;

    /// Persist the current state of an existing entry.
    fn update(&self, entry: &Entry) -> Result<(), DomainError>;

    /// Physically remove an entry. Returns false when the ID is unknown.
    fn delete_permanently(&self, id: i32) -> Result<bool, DomainError>;
}
