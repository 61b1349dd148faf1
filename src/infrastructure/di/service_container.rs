// src/infrastructure/di/service_container.rs
use std::path::Path;
use std::sync::Arc;

use crossterm::style::Stylize;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::entry_service::EntryService;
use crate::application::services::tagging_service::TaggingService;
use crate::application::{EntryServiceImpl, TaggingServiceImpl};
use crate::config::Settings;
use crate::domain::tagging::TagExtractor;
use crate::infrastructure::repositories::sqlite::repository::SqliteEntryRepository;
use crate::infrastructure::tagging::OpenAiTagExtractor;

/// Production service container - single composition root.
pub struct ServiceContainer {
    pub entry_repository: Arc<SqliteEntryRepository>,
    pub tag_extractor: Arc<dyn TagExtractor>,
    pub entry_service: Arc<dyn EntryService>,
    pub tagging_service: Arc<dyn TaggingService>,
}

impl ServiceContainer {
    /// Create all services with explicit dependency injection.
    pub fn new(settings: &Settings) -> ApplicationResult<Self> {
        let repository = Self::create_repository(&settings.db_url)?;
        let extractor: Arc<dyn TagExtractor> = Arc::new(OpenAiTagExtractor::new(
            settings.openai.api_base.clone(),
            settings.openai.model.clone(),
        ));

        Ok(Self::wire(repository, extractor))
    }

    /// Container with a caller-provided extractor and an existing (or
    /// freshly created) database. Used by tests and by `create-db`.
    pub fn with_extractor(
        db_url: &str,
        extractor: Arc<dyn TagExtractor>,
    ) -> ApplicationResult<Self> {
        let repository = SqliteEntryRepository::from_url(db_url).map_err(|e| {
            ApplicationError::Other(format!("Failed to create SQLite entry repository: {}", e))
        })?;

        Ok(Self::wire(Arc::new(repository), extractor))
    }

    fn wire(
        entry_repository: Arc<SqliteEntryRepository>,
        tag_extractor: Arc<dyn TagExtractor>,
    ) -> Self {
        let entry_service = Arc::new(EntryServiceImpl::new(entry_repository.clone()));
        let tagging_service = Arc::new(TaggingServiceImpl::new(tag_extractor.clone()));

        Self {
            entry_repository,
            tag_extractor,
            entry_service,
            tagging_service,
        }
    }

    fn create_repository(db_url: &str) -> ApplicationResult<Arc<SqliteEntryRepository>> {
        // Check if the database file exists before trying to create the repository
        if !Path::new(db_url).exists() {
            eprintln!("{}", "Error: Database not found.".red());
            eprintln!("No database configured or the configured database does not exist.");
            eprintln!("Either:");
            eprintln!("  1. Set TICKLIST_DB_URL environment variable to point to an existing database");
            eprintln!("  2. Create a database using 'ticklist create-db <path>'");
            eprintln!("  3. Ensure the default database at '~/.config/ticklist/ticklist.db' exists");
            std::process::exit(1);
        }

        // Create the repository, runs all migrations
        let repository = SqliteEntryRepository::from_url(db_url).map_err(|e| {
            ApplicationError::Other(format!("Failed to create SQLite entry repository: {}", e))
        })?;

        Ok(Arc::new(repository))
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("entry_repository", &"Arc<SqliteEntryRepository>")
            .field("tag_extractor", &"Arc<dyn TagExtractor>")
            .field("entry_service", &"Arc<dyn EntryService>")
            .field("tagging_service", &"Arc<dyn TaggingService>")
            .finish()
    }
}
