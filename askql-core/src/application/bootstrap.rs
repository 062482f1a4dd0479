// askql-core/src/application/bootstrap.rs

use serde::Serialize;
use tracing::{info, instrument};

use crate::domain::student::{COUNT_SQL, CREATE_TABLE_SQL, seed_students};
use crate::error::AskqlError;
use crate::ports::connector::Connector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BootstrapReport {
    /// True when this run inserted the seed rows.
    pub seeded: bool,
    pub row_count: i64,
}

/// Ensures the STUDENT table exists and holds data.
///
/// Seed rows go in only when the table is empty, so running this any number
/// of times never duplicates them.
#[instrument(skip(connector), fields(engine = %connector.dialect()))]
pub async fn init_database(connector: &dyn Connector) -> Result<BootstrapReport, AskqlError> {
    connector.execute_batch(CREATE_TABLE_SQL).await?;

    let existing = connector.query_scalar(COUNT_SQL).await?;
    if existing > 0 {
        info!(rows = existing, "Table already populated, skipping seed");
        return Ok(BootstrapReport {
            seeded: false,
            row_count: existing,
        });
    }

    let seed = seed_students();
    connector.insert_students(&seed).await?;

    let row_count = connector.query_scalar(COUNT_SQL).await?;
    info!(rows = row_count, "🌱 Seeded STUDENT table");

    Ok(BootstrapReport {
        seeded: true,
        row_count,
    })
}
