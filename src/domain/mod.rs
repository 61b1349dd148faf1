pub mod entry;
pub mod error;
pub mod list_filter;
pub mod repositories;
pub mod tag_record;
pub mod tagging;
