// src/infrastructure/repositories/sqlite/model.rs
use chrono::NaiveDateTime;
use diesel::{AsChangeset, Identifiable, Insertable, Queryable};

/// Row representation of an entry.
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DbEntry {
    pub id: i32,
    pub text: String,
    /// Tag record serialized as JSON.
    pub tags: String,
    pub is_expanded: bool,
    pub created_ts: NaiveDateTime,
    pub updated_ts: NaiveDateTime,
    pub deleted_ts: Option<NaiveDateTime>,
}

/// New entry for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::entries)]
pub struct NewEntry {
    pub text: String,
    pub tags: String,
    pub is_expanded: bool,
    pub created_ts: NaiveDateTime,
    pub updated_ts: NaiveDateTime,
    pub deleted_ts: Option<NaiveDateTime>,
}

/// Changes for updating an entry. `created_ts` is immutable and left out.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = crate::infrastructure::repositories::sqlite::schema::entries)]
pub struct DbEntryChanges {
    pub text: String,
    pub tags: String,
    pub is_expanded: bool,
    pub updated_ts: NaiveDateTime,
    #[diesel(treat_none_as_null = true)]
    pub deleted_ts: Option<NaiveDateTime>,
}
