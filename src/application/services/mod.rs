pub mod entry_service;
pub mod entry_service_impl;
pub mod tagging_service;
pub mod tagging_service_impl;

pub use entry_service::{EntryChanges, EntryService};
pub use entry_service_impl::EntryServiceImpl;
pub use tagging_service::TaggingService;
pub use tagging_service_impl::TaggingServiceImpl;
