// askql/src/main.rs

mod cli;
mod commands;
mod web;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::Overrides;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // RUST_LOG=debug askql ask "..." to see prompts, SQL and timings.
    // Logs go to stderr, results to stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            question,
            db_path,
            guard,
        } => {
            let overrides = Overrides {
                db_path,
                guard,
                ..Default::default()
            };
            commands::ask::execute(question, overrides).await
        }
        Commands::Query { sql, db_path } => {
            let overrides = Overrides {
                db_path,
                ..Default::default()
            };
            commands::query::execute(sql, overrides).await
        }
        Commands::Init { db_path } => {
            let overrides = Overrides {
                db_path,
                ..Default::default()
            };
            commands::init::execute(overrides).await
        }
        Commands::Serve {
            bind,
            db_path,
            guard,
        } => {
            let overrides = Overrides {
                db_path,
                guard,
                bind,
            };
            commands::serve::execute(overrides).await
        }
    }
}
