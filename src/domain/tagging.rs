// src/domain/tagging.rs
use thiserror::Error;

use crate::domain::tag_record::TagRecord;

/// Failures of the tag extraction call.
///
/// Each kind carries a message the user can act on; the HTTP layer maps
/// them to distinct status codes. `MissingApiKey` is a configuration error
/// and is raised before any network call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaggingError {
    #[error("OPENAI_API_KEY is not set; configure it to enable tag extraction")]
    MissingApiKey,

    #[error("OpenAI rejected the API key; check that OPENAI_API_KEY is valid")]
    Unauthorized,

    #[error("OpenAI rate limit exceeded; retry in a moment")]
    RateLimited,

    #[error("OpenAI quota exhausted; check the account balance")]
    QuotaExhausted,

    #[error("Tag extraction request failed: {0}")]
    RequestFailed(String),

    #[error("Tag extraction returned an unusable response: {0}")]
    InvalidResponse(String),
}

pub type TaggingResult<T> = Result<T, TaggingError>;

/// Derives a tag record from free text.
///
/// Implementations live in the infrastructure layer; the production one
/// calls a language model with a fixed output schema.
pub trait TagExtractor: std::fmt::Debug + Send + Sync {
    fn extract(&self, text: &str) -> TaggingResult<TagRecord>;
}
