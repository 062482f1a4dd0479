// askql/src/commands/ask.rs
//
// USE CASE: Natural-language question -> SQL -> results.

use std::sync::Arc;

use askql_core::application::{AskPipeline, init_database};
use askql_core::domain::StatementGuard;
use askql_core::infrastructure::adapters::{OpenAiGenerator, open_connector};
use miette::Result;

use super::{Overrides, render, resolve_config};

pub async fn execute(question: String, overrides: Overrides) -> Result<()> {
    let config = resolve_config(overrides)?;

    let connector = open_connector(config.dialect, &config.db_path)?;
    init_database(connector.as_ref()).await?;

    // No key, no model: stop here.
    let generator = Arc::new(OpenAiGenerator::from_config(&config)?);

    let pipeline = AskPipeline::new(generator, connector, StatementGuard::new(config.guard));
    let answer = pipeline.ask(&question).await?;

    if !render::print_answer(&answer) {
        std::process::exit(1);
    }
    Ok(())
}
