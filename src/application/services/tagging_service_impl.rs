// src/application/services/tagging_service_impl.rs
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::tagging_service::TaggingService;
use crate::domain::tag_record::TagRecord;
use crate::domain::tagging::TagExtractor;

pub struct TaggingServiceImpl {
    extractor: Arc<dyn TagExtractor>,
}

impl TaggingServiceImpl {
    pub fn new(extractor: Arc<dyn TagExtractor>) -> Self {
        Self { extractor }
    }
}

impl TaggingService for TaggingServiceImpl {
    #[instrument(skip(self), level = "debug", fields(text_len = text.len()))]
    fn extract_tags(&self, text: &str) -> ApplicationResult<TagRecord> {
        // Validation happens before any model call is attempted.
        if text.trim().is_empty() {
            return Err(ApplicationError::Validation(
                "text for tag extraction cannot be empty".to_string(),
            ));
        }

        let tags = self.extractor.extract(text).map_err(ApplicationError::Tagging)?;
        debug!(empty = tags.is_empty(), "tag extraction finished");
        Ok(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tagging::TaggingError;
    use crate::infrastructure::tagging::DummyTagExtractor;

    #[test]
    fn given_blank_text_when_extracting_then_validation_error_before_any_call() {
        let service = TaggingServiceImpl::new(Arc::new(DummyTagExtractor::empty()));

        let err = service.extract_tags("   ").unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }

    #[test]
    fn given_extractor_output_when_extracting_then_record_is_passed_through() {
        let record = TagRecord {
            person: Some("张三".to_string()),
            time: Some("明天".to_string()),
            product: Some("GitHub".to_string()),
            todo: Some(true),
        };
        let service = TaggingServiceImpl::new(Arc::new(DummyTagExtractor::returning(
            record.clone(),
        )));

        let tags = service.extract_tags("明天和张三讨论GitHub项目进展").unwrap();
        assert_eq!(tags, record);
    }

    #[test]
    fn given_failing_extractor_when_extracting_then_kind_is_preserved() {
        let service = TaggingServiceImpl::new(Arc::new(DummyTagExtractor::failing(
            TaggingError::QuotaExhausted,
        )));

        let err = service.extract_tags("some text").unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Tagging(TaggingError::QuotaExhausted)
        ));
    }
}
