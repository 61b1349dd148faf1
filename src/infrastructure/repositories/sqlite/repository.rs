// src/infrastructure/repositories/sqlite/repository.rs

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::Integer;
use tracing::{debug, instrument};

use super::connection::{ConnectionPool, PooledConnection};
use super::error::{SqliteRepositoryError, SqliteResult};
use crate::domain::entry::Entry;
use crate::domain::error::DomainError;
use crate::domain::repositories::entry_repository::EntryRepository;
use crate::domain::tag_record::TagRecord;
use crate::infrastructure::repositories::sqlite::model::{DbEntry, DbEntryChanges, NewEntry};
use crate::infrastructure::repositories::sqlite::schema::entries::dsl;

#[derive(Clone, Debug)]
pub struct SqliteEntryRepository {
    pool: ConnectionPool,
}

impl SqliteEntryRepository {
    /// Create a new SQLite repository with the provided connection pool.
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Create a new SQLite repository from a database URL, running all
    /// pending migrations.
    #[instrument(skip_all, level = "debug")]
    pub fn from_url(database_url: &str) -> SqliteResult<Self> {
        let pool = super::connection::init_pool(database_url)?;
        Ok(Self { pool })
    }

    /// Get a connection from the pool.
    #[instrument(skip_all, level = "trace")]
    pub fn get_connection(&self) -> SqliteResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| SqliteRepositoryError::ConnectionPoolError(e.to_string()))
    }

    /// Convert a database row to a domain entity.
    fn to_domain_model(&self, db_entry: DbEntry) -> SqliteResult<Entry> {
        let tags = TagRecord::from_storage(&db_entry.tags).map_err(|e| {
            SqliteRepositoryError::ConversionError(format!(
                "Failed to parse tag record for entry {}: {}",
                db_entry.id, e
            ))
        })?;

        Ok(Entry::from_storage(
            db_entry.id,
            db_entry.text,
            tags,
            db_entry.is_expanded,
            DateTime::<Utc>::from_naive_utc_and_offset(db_entry.created_ts, Utc),
            DateTime::<Utc>::from_naive_utc_and_offset(db_entry.updated_ts, Utc),
            db_entry
                .deleted_ts
                .map(|ts| DateTime::<Utc>::from_naive_utc_and_offset(ts, Utc)),
        ))
    }

    /// Convert a domain entity to an update set.
    fn to_db_changes(&self, entry: &Entry) -> SqliteResult<DbEntryChanges> {
        Ok(DbEntryChanges {
            text: entry.text.clone(),
            tags: entry
                .tags
                .to_storage()
                .map_err(|e| SqliteRepositoryError::ConversionError(e.to_string()))?,
            is_expanded: entry.is_expanded,
            updated_ts: entry.updated_at.naive_utc(),
            deleted_ts: entry.deleted_at.map(|ts| ts.naive_utc()),
        })
    }

    fn load_rows(&self, rows: Vec<DbEntry>) -> Result<Vec<Entry>, DomainError> {
        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(self.to_domain_model(row)?);
        }
        Ok(entries)
    }
}

impl EntryRepository for SqliteEntryRepository {
    #[instrument(skip_all, level = "debug")]
    fn get_by_id(&self, id: i32) -> Result<Option<Entry>, DomainError> {
        let mut conn = self.get_connection()?;

        let result = dsl::entries
            .filter(dsl::id.eq(id))
            .first::<DbEntry>(&mut conn)
            .optional()
            .map_err(SqliteRepositoryError::DatabaseError)?;

        match result {
            Some(db_entry) => Ok(Some(self.to_domain_model(db_entry)?)),
            None => Ok(None),
        }
    }

    #[instrument(skip_all, level = "debug")]
    fn list_active(&self) -> Result<Vec<Entry>, DomainError> {
        let mut conn = self.get_connection()?;

        let rows = dsl::entries
            .filter(dsl::deleted_ts.is_null())
            .order(dsl::created_ts.desc())
            .load::<DbEntry>(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        self.load_rows(rows)
    }

    #[instrument(skip_all, level = "debug")]
    fn list_trashed(&self) -> Result<Vec<Entry>, DomainError> {
        let mut conn = self.get_connection()?;

        let rows = dsl::entries
            .filter(dsl::deleted_ts.is_not_null())
            .order(dsl::deleted_ts.desc())
            .load::<DbEntry>(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        self.load_rows(rows)
    }

    #[instrument(skip_all, level = "debug")]
    fn add(&self, entry: &mut Entry) -> Result<(), DomainError> {
        let mut conn = self.get_connection()?;

        let new_entry = NewEntry {
            text: entry.text.clone(),
            tags: entry
                .tags
                .to_storage()
                .map_err(|e| SqliteRepositoryError::ConversionError(e.to_string()))?,
            is_expanded: entry.is_expanded,
            created_ts: entry.created_at.naive_utc(),
            updated_ts: entry.updated_at.naive_utc(),
            deleted_ts: entry.deleted_at.map(|ts| ts.naive_utc()),
        };

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            debug!("Inserting entry: {:?}", new_entry.text);

            let result = diesel::insert_into(dsl::entries)
                .values(&new_entry)
                .execute(conn)?;

            if result == 0 {
                return Err(diesel::result::Error::NotFound);
            }

            let id = diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
                .get_result::<i32>(conn)?;

            entry.set_id(id);

            Ok(())
        })
        .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(())
    }

    #[instrument(skip_all, level = "debug")]
    fn update(&self, entry: &Entry) -> Result<(), DomainError> {
        let mut conn = self.get_connection()?;

        let id = entry
            .id
            .ok_or_else(|| SqliteRepositoryError::OperationFailed("Entry has no ID".to_string()))?;

        let changes = self.to_db_changes(entry)?;

        let result = diesel::update(dsl::entries.filter(dsl::id.eq(id)))
            .set(&changes)
            .execute(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        if result == 0 {
            return Err(SqliteRepositoryError::EntryNotFound(id).into());
        }

        Ok(())
    }

    #[instrument(skip_all, level = "debug")]
    fn delete_permanently(&self, id: i32) -> Result<bool, DomainError> {
        let mut conn = self.get_connection()?;

        let result = diesel::delete(dsl::entries.filter(dsl::id.eq(id)))
            .execute(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(result > 0)
    }
}
