// src/api/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entry::Entry;
use crate::domain::tag_record::TagRecord;

/// Wire representation of an entry. Timestamps are RFC3339 UTC; the tag
/// record omits absent fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDto {
    pub id: i32,
    pub text: String,
    pub tags: TagRecord,
    pub is_expanded: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Entry> for EntryDto {
    fn from(entry: Entry) -> Self {
        Self {
            // Persisted entries always carry an ID.
            id: entry.id.unwrap_or_default(),
            text: entry.text,
            tags: entry.tags,
            is_expanded: entry.is_expanded,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
            deleted_at: entry.deleted_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EntryListResponse {
    pub entries: Vec<EntryDto>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EntryResponse {
    pub entry: EntryDto,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TagsResponse {
    pub tags: TagRecord,
}

#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub text: String,
    pub tags: Option<TagRecord>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntryRequest {
    pub text: Option<String>,
    pub tags: Option<TagRecord>,
    pub is_expanded: Option<bool>,
}
