// askql-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatabaseError {
    #[error("SQLite Engine Error: {0}")]
    #[diagnostic(
        code(askql::infra::database::sqlite),
        help("An error occurred inside the SQL engine.")
    )]
    Sqlite(#[from] rusqlite::Error),

    #[error("DuckDB Engine Error: {0}")]
    #[diagnostic(
        code(askql::infra::database::duckdb),
        help("An error occurred inside the SQL engine.")
    )]
    DuckDB(#[from] duckdb::Error),
}

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- DATABASE (Abstracted) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DatabaseError),

    // --- MODEL API ---
    #[error("{0} not found in the environment")]
    #[diagnostic(
        code(askql::infra::api_key),
        help("Export it in your shell before running askql.")
    )]
    MissingApiKey(String),

    #[error("Language model error: {0}")]
    #[diagnostic(code(askql::infra::llm))]
    Llm(String),

    #[error("HTTP Error: {0}")]
    #[diagnostic(
        code(askql::infra::http),
        help("Check network access and the configured API base URL.")
    )]
    Http(#[from] reqwest::Error),

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(askql::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(askql::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(askql::infra::config))]
    ConfigError(String),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(askql::infra::config_invalid))]
    Validation(#[from] validator::ValidationErrors),

    // --- TEMPLATING ---
    #[error("Template Rendering Error: {0}")]
    #[diagnostic(code(askql::infra::template))]
    TemplateError(#[from] minijinja::Error),
}

impl From<rusqlite::Error> for InfrastructureError {
    fn from(err: rusqlite::Error) -> Self {
        InfrastructureError::Database(DatabaseError::Sqlite(err))
    }
}

impl From<duckdb::Error> for InfrastructureError {
    fn from(err: duckdb::Error) -> Self {
        InfrastructureError::Database(DatabaseError::DuckDB(err))
    }
}
