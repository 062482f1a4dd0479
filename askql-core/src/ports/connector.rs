// askql-core/src/ports/connector.rs

// What the application needs from a SQL engine, without knowing which one.

use crate::domain::dialect::SqlDialect;
use crate::domain::outcome::QueryOutcome;
use crate::domain::student::Student;
use crate::error::AskqlError;
use async_trait::async_trait;

#[async_trait]
pub trait Connector: Send + Sync {
    /// Runs exactly one statement. A statement starting with `select` yields
    /// all of its rows, anything else is executed, committed and acknowledged.
    /// Text holding several statements is refused before any of them runs.
    async fn run_statement(&self, sql: &str) -> Result<QueryOutcome, AskqlError>;

    async fn execute_batch(&self, sql: &str) -> Result<(), AskqlError>;

    async fn query_scalar(&self, sql: &str) -> Result<i64, AskqlError>;

    /// Inserts all records atomically.
    async fn insert_students(&self, students: &[Student]) -> Result<(), AskqlError>;

    /// SQL dialect the engine speaks.
    fn dialect(&self) -> SqlDialect;
}
