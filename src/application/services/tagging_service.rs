// src/application/services/tagging_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::tag_record::TagRecord;

/// Application-level facade over the tag extractor: validates the input,
/// then delegates. Extraction failures surface per-kind so callers can
/// report a distinct, actionable message.
pub trait TaggingService: Send + Sync {
    fn extract_tags(&self, text: &str) -> ApplicationResult<TagRecord>;
}
