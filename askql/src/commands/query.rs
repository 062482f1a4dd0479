// askql/src/commands/query.rs
//
// USE CASE: Execute a raw SQL statement (ad-hoc).

use askql_core::application::{execute_query, init_database};
use askql_core::infrastructure::adapters::open_connector;
use miette::Result;

use super::{Overrides, render, resolve_config};

pub async fn execute(sql: String, overrides: Overrides) -> Result<()> {
    let config = resolve_config(overrides)?;
    let connector = open_connector(config.dialect, &config.db_path)?;
    init_database(connector.as_ref()).await?;

    match execute_query(connector.as_ref(), &sql).await {
        Ok(outcome) => render::print_outcome(&outcome),
        Err(e) => {
            eprintln!("❌ Query failed: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}
