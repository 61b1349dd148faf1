// src/infrastructure/tagging/dummy_provider.rs
use crate::domain::tag_record::TagRecord;
use crate::domain::tagging::{TagExtractor, TaggingError, TaggingResult};

/// Deterministic extractor for tests and offline operation: returns a
/// canned record or a canned failure, never touches the network.
#[derive(Debug, Clone, Default)]
pub struct DummyTagExtractor {
    record: TagRecord,
    failure: Option<TaggingError>,
}

impl DummyTagExtractor {
    /// Always returns an empty tag record.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Always returns the given record.
    pub fn returning(record: TagRecord) -> Self {
        Self {
            record,
            failure: None,
        }
    }

    /// Always fails with the given error.
    pub fn failing(error: TaggingError) -> Self {
        Self {
            record: TagRecord::default(),
            failure: Some(error),
        }
    }
}

impl TagExtractor for DummyTagExtractor {
    fn extract(&self, _text: &str) -> TaggingResult<TagRecord> {
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.record.clone()),
        }
    }
}
