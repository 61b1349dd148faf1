// src/infrastructure/repositories/sqlite/error.rs

use diesel::r2d2;
use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqliteRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DieselError),

    #[error("Diesel connection error: {0}")]
    ConnectionError(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    ConnectionPoolError(String),

    #[error("Entry not found with ID: {0}")]
    EntryNotFound(i32),

    #[error("Failed to convert entity: {0}")]
    ConversionError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Repository operation failed: {0}")]
    OperationFailed(String),
}

pub type SqliteResult<T> = Result<T, SqliteRepositoryError>;

impl From<r2d2::Error> for SqliteRepositoryError {
    fn from(err: r2d2::Error) -> Self {
        SqliteRepositoryError::ConnectionPoolError(err.to_string())
    }
}

impl From<SqliteRepositoryError> for crate::domain::error::DomainError {
    fn from(err: SqliteRepositoryError) -> Self {
        use crate::domain::error::DomainError;

        match err {
            SqliteRepositoryError::EntryNotFound(id) => DomainError::EntryNotFound(id.to_string()),
            SqliteRepositoryError::DatabaseError(diesel_err) => match diesel_err {
                DieselError::NotFound => DomainError::EntryNotFound("resource not found".to_string()),
                DieselError::DatabaseError(_, info) => DomainError::EntryOperationFailed(format!(
                    "Database error: {}",
                    info.message()
                )),
                _ => DomainError::EntryOperationFailed(format!("Database error: {}", diesel_err)),
            },
            SqliteRepositoryError::ConnectionError(e) => {
                DomainError::EntryOperationFailed(format!("Database connection error: {}", e))
            }
            SqliteRepositoryError::ConnectionPoolError(e) => {
                DomainError::EntryOperationFailed(format!("Connection pool error: {}", e))
            }
            SqliteRepositoryError::ConversionError(e) => {
                DomainError::EntryOperationFailed(format!("Data conversion error: {}", e))
            }
            SqliteRepositoryError::IoError(e) => {
                DomainError::EntryOperationFailed(format!("IO error: {}", e))
            }
            SqliteRepositoryError::MigrationError(e) => {
                DomainError::EntryOperationFailed(format!("Migration error: {}", e))
            }
            SqliteRepositoryError::OperationFailed(e) => DomainError::EntryOperationFailed(e),
        }
    }
}
