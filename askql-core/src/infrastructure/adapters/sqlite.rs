// askql-core/src/infrastructure/adapters/sqlite.rs

use async_trait::async_trait;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::domain::dialect::SqlDialect;
use crate::domain::outcome::{CellValue, QueryOutcome, is_select};
use crate::domain::student::{INSERT_SQL, Student};
use crate::error::AskqlError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::connector::Connector;

/// Default engine: a SQLite file, so the SQL the model writes runs with
/// SQLite semantics (case-insensitive `LIKE`, integer division, type affinity).
///
/// Same connection model as the DuckDB adapter: one connection per call,
/// dropped before returning.
pub struct SqliteConnector {
    db_path: PathBuf,
    gate: Mutex<()>,
}

impl SqliteConnector {
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self, InfrastructureError> {
        let db_path = db_path.as_ref();

        if db_path.as_os_str() == ":memory:" {
            return Err(InfrastructureError::ConfigError(
                "in-memory databases are not supported, use a file path".to_string(),
            ));
        }

        Ok(Self {
            db_path: db_path.to_path_buf(),
            gate: Mutex::new(()),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, ()>, AskqlError> {
        self.gate.lock().map_err(|_| {
            AskqlError::Infrastructure(InfrastructureError::Io(std::io::Error::other(
                "SQLite Mutex Poisoned",
            )))
        })
    }

    fn open(&self) -> Result<Connection, AskqlError> {
        debug!(path = ?self.db_path, "Opening SQLite connection");
        Ok(Connection::open(&self.db_path)?)
    }
}

fn to_cell(value: ValueRef<'_>) -> CellValue {
    match value {
        ValueRef::Null => CellValue::Null,
        ValueRef::Integer(i) => CellValue::Integer(i),
        ValueRef::Real(f) => CellValue::Real(f),
        ValueRef::Text(s) => CellValue::Text(String::from_utf8_lossy(s).into_owned()),
        ValueRef::Blob(b) => CellValue::Other(format!("<{} bytes>", b.len())),
    }
}

#[async_trait]
impl Connector for SqliteConnector {
    async fn run_statement(&self, sql: &str) -> Result<QueryOutcome, AskqlError> {
        let sql = sql.trim();
        SqlDialect::Sqlite.ensure_single_statement(sql)?;

        let _gate = self.lock()?;
        let conn = self.open()?;
        let mut stmt = conn.prepare(sql)?;

        if !is_select(sql) {
            // Stepped to completion; auto-commit makes the write durable here.
            let mut rows = stmt.query([])?;
            while rows.next()?.is_some() {}
            debug!(changes = conn.changes(), "Statement executed");
            return Ok(QueryOutcome::executed());
        }

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let mut fetched = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                values.push(to_cell(row.get_ref(idx)?));
            }
            fetched.push(values);
        }

        Ok(QueryOutcome::Rows {
            columns,
            rows: fetched,
        })
    }

    async fn execute_batch(&self, sql: &str) -> Result<(), AskqlError> {
        let _gate = self.lock()?;
        let conn = self.open()?;
        conn.execute_batch(sql)?;
        Ok(())
    }

    async fn query_scalar(&self, sql: &str) -> Result<i64, AskqlError> {
        let _gate = self.lock()?;
        let conn = self.open()?;
        let value: i64 = conn.query_row(sql, [], |row| row.get(0))?;
        Ok(value)
    }

    async fn insert_students(&self, students: &[Student]) -> Result<(), AskqlError> {
        let _gate = self.lock()?;
        let mut conn = self.open()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT_SQL)?;
            for s in students {
                stmt.execute(params![s.name, s.class, s.section, s.marks])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn dialect(&self) -> SqlDialect {
        SqlDialect::Sqlite
    }
}
