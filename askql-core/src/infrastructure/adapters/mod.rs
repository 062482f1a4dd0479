pub mod duckdb;
pub mod openai;
pub mod sqlite;

pub use self::duckdb::DuckDBConnector;
pub use self::openai::OpenAiGenerator;
pub use self::sqlite::SqliteConnector;

use std::path::Path;
use std::sync::Arc;

use crate::domain::dialect::SqlDialect;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::connector::Connector;

/// The connector for the configured engine.
pub fn open_connector(
    dialect: SqlDialect,
    db_path: &Path,
) -> Result<Arc<dyn Connector>, InfrastructureError> {
    let connector: Arc<dyn Connector> = match dialect {
        SqlDialect::Sqlite => Arc::new(SqliteConnector::new(db_path)?),
        SqlDialect::Duckdb => Arc::new(DuckDBConnector::new(db_path)?),
    };
    Ok(connector)
}
