// askql-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::{DatabaseError, InfrastructureError};
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum AskqlError {
    // --- DOMAIN (empty input, guard rejections) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE (database, model API, config) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl From<std::io::Error> for AskqlError {
    fn from(err: std::io::Error) -> Self {
        AskqlError::Infrastructure(InfrastructureError::Io(err))
    }
}

// Lets adapters use `?` directly on driver calls.
impl From<rusqlite::Error> for AskqlError {
    fn from(err: rusqlite::Error) -> Self {
        AskqlError::Infrastructure(InfrastructureError::Database(DatabaseError::Sqlite(err)))
    }
}

impl From<duckdb::Error> for AskqlError {
    fn from(err: duckdb::Error) -> Self {
        AskqlError::Infrastructure(InfrastructureError::Database(DatabaseError::DuckDB(err)))
    }
}
