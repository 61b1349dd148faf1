// src/infrastructure/di/test_container.rs
use std::sync::Arc;

use tempfile::TempDir;

use crate::domain::tagging::TagExtractor;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::tagging::DummyTagExtractor;

/// Container wired against a throwaway database and a dummy extractor.
/// The returned `TempDir` keeps the database alive for the test's lifetime.
pub fn create_test_container() -> (TempDir, ServiceContainer) {
    create_test_container_with_extractor(Arc::new(DummyTagExtractor::empty()))
}

pub fn create_test_container_with_extractor(
    extractor: Arc<dyn TagExtractor>,
) -> (TempDir, ServiceContainer) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("ticklist.db");
    let db_url = db_path.to_str().expect("Non-UTF8 temp path").to_string();

    let container = ServiceContainer::with_extractor(&db_url, extractor)
        .expect("Failed to create test container");

    (temp_dir, container)
}
