// askql-core/src/domain/dialect.rs

// The engine that stores STUDENT decides which SQL the model is asked for and
// which grammar generated statements are parsed with.

use serde::{Deserialize, Serialize};
use sqlparser::ast::Statement;
use sqlparser::dialect::{DuckDbDialect, SQLiteDialect};
use sqlparser::parser::{Parser, ParserError};
use std::fmt;

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SqlDialect {
    #[default]
    Sqlite,
    Duckdb,
}

impl SqlDialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sqlite => "sqlite",
            Self::Duckdb => "duckdb",
        }
    }

    /// Name used in the prompt ("a valid SQLite SQL query").
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Sqlite => "SQLite",
            Self::Duckdb => "DuckDB",
        }
    }

    pub fn parse(&self, sql: &str) -> Result<Vec<Statement>, ParserError> {
        match self {
            Self::Sqlite => Parser::parse_sql(&SQLiteDialect {}, sql),
            Self::Duckdb => Parser::parse_sql(&DuckDbDialect {}, sql),
        }
    }

    /// Fails when `sql` holds more than one statement, before anything runs.
    ///
    /// Text the parser cannot read is let through: the engine reports its own
    /// error for it.
    pub fn ensure_single_statement(&self, sql: &str) -> Result<(), DomainError> {
        match self.parse(sql) {
            Ok(statements) if statements.len() > 1 => {
                Err(DomainError::MultipleStatements(statements.len()))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SqlDialect {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "duckdb" => Ok(Self::Duckdb),
            _ => Err(DomainError::UnknownDialect(s.to_string())),
        }
    }
}
