// askql-core/src/infrastructure/adapters/duckdb.rs

use async_trait::async_trait;
use duckdb::types::Value;
use duckdb::{Config, Connection, params};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::domain::dialect::SqlDialect;
use crate::domain::outcome::{CellValue, QueryOutcome, is_select};
use crate::domain::student::{INSERT_SQL, Student};
use crate::error::AskqlError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::connector::Connector;

/// DuckDB file on a fixed path, selected with `dialect: duckdb`.
///
/// Every call opens its own connection and drops it before returning: no pool,
/// no handle kept between calls, no transaction spanning two calls.
pub struct DuckDBConnector {
    db_path: PathBuf,
    // Two live handles on the same file inside one process must not overlap.
    gate: Mutex<()>,
}

impl DuckDBConnector {
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self, InfrastructureError> {
        let db_path = db_path.as_ref();

        // An in-memory database would be gone as soon as the first call returns.
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
                "DuckDB Mutex Poisoned",
            )))
        })
    }

    fn open(&self) -> Result<Connection, AskqlError> {
        debug!(path = ?self.db_path, "Opening DuckDB connection");
        Ok(Connection::open_with_flags(&self.db_path, Config::default())?)
    }
}

fn to_cell(value: Value) -> CellValue {
    match value {
        Value::Null => CellValue::Null,
        Value::Boolean(b) => CellValue::Boolean(b),
        Value::TinyInt(i) => CellValue::Integer(i.into()),
        Value::SmallInt(i) => CellValue::Integer(i.into()),
        Value::Int(i) => CellValue::Integer(i.into()),
        Value::BigInt(i) => CellValue::Integer(i),
        Value::UTinyInt(i) => CellValue::Integer(i.into()),
        Value::USmallInt(i) => CellValue::Integer(i.into()),
        Value::UInt(i) => CellValue::Integer(i.into()),
        Value::UBigInt(i) => match i64::try_from(i) {
            Ok(i) => CellValue::Integer(i),
            Err(_) => CellValue::Other(i.to_string()),
        },
        Value::HugeInt(i) => match i64::try_from(i) {
            Ok(i) => CellValue::Integer(i),
            Err(_) => CellValue::Other(i.to_string()),
        },
        Value::Float(f) => CellValue::Real(f.into()),
        Value::Double(f) => CellValue::Real(f),
        Value::Text(s) => CellValue::Text(s),
        other => CellValue::Other(format!("{:?}", other)),
    }
}

#[async_trait]
impl Connector for DuckDBConnector {
    async fn run_statement(&self, sql: &str) -> Result<QueryOutcome, AskqlError> {
        let sql = sql.trim();
        // DuckDB would run every statement but the last while preparing.
        SqlDialect::Duckdb.ensure_single_statement(sql)?;

        let _gate = self.lock()?;
        let conn = self.open()?;

        if !is_select(sql) {
            // DuckDB runs in auto-commit mode: the write is durable once this returns.
            let affected = conn.execute(sql, [])?;
            debug!(affected, "Statement executed");
            return Ok(QueryOutcome::executed());
        }

        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query([])?;

        // Column names are only known once the statement has run.
        let columns = rows
            .as_ref()
            .map(|stmt| stmt.column_names())
            .unwrap_or_default();

        let mut fetched = Vec::new();
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                values.push(to_cell(row.get::<_, Value>(idx)?));
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
        SqlDialect::Duckdb
    }
}
