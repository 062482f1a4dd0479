// askql/src/commands/init.rs
//
// USE CASE: Create and seed the STUDENT table.

use askql_core::application::init_database;
use askql_core::infrastructure::adapters::open_connector;
use miette::Result;

use super::{Overrides, resolve_config};

pub async fn execute(overrides: Overrides) -> Result<()> {
    let config = resolve_config(overrides)?;
    let connector = open_connector(config.dialect, &config.db_path)?;

    let report = init_database(connector.as_ref()).await?;

    if report.seeded {
        println!("🌱 Seeded {} students into {}", report.row_count, config.db_path.display());
    } else {
        println!(
            "✨ {} already holds {} students, nothing to do",
            config.db_path.display(),
            report.row_count
        );
    }
    Ok(())
}
