pub mod di;
pub mod repositories;
pub mod tagging;
