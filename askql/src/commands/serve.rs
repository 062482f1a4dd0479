// askql/src/commands/serve.rs
//
// USE CASE: Browser page with a question box.

use std::sync::Arc;

use askql_core::application::{AskPipeline, init_database};
use askql_core::domain::StatementGuard;
use askql_core::infrastructure::adapters::{OpenAiGenerator, open_connector};
use miette::{IntoDiagnostic, Result};

use super::{Overrides, resolve_config};
use crate::web::{self, WebState};

pub async fn execute(overrides: Overrides) -> Result<()> {
    let config = resolve_config(overrides)?;

    let connector = open_connector(config.dialect, &config.db_path)?;
    init_database(connector.as_ref()).await?;

    // Refuse to start without a key rather than failing on the first question.
    let generator = Arc::new(OpenAiGenerator::from_config(&config)?);

    let pipeline = AskPipeline::new(generator, connector, StatementGuard::new(config.guard));
    let state = Arc::new(WebState::new(pipeline, config.subtitle.clone()).into_diagnostic()?);

    println!("🌐 askql listening on http://{}", config.bind);
    web::serve(&config.bind, state).await
}
