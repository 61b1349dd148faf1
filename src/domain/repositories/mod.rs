pub mod entry_repository;
