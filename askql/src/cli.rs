// askql/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use askql_core::domain::GuardMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "askql")]
#[command(about = "Ask the student database questions in plain English", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🧠 Translates a question into SQL and runs it
    Ask {
        /// The question, in plain English
        question: String,

        /// Path to the database file (default: student.db)
        #[arg(long)]
        db_path: Option<PathBuf>,

        /// Which generated statements may run: read_only | read_write | unrestricted
        #[arg(long)]
        guard: Option<GuardMode>,
    },

    /// ⚡ Executes a raw SQL statement (no model, no guard)
    Query {
        sql: String,

        #[arg(long)]
        db_path: Option<PathBuf>,
    },

    /// 🌱 Creates and seeds the STUDENT table if needed
    Init {
        #[arg(long)]
        db_path: Option<PathBuf>,
    },

    /// 🌐 Serves the question page in the browser
    Serve {
        /// Address to listen on (default: 127.0.0.1:8501)
        #[arg(long)]
        bind: Option<String>,

        #[arg(long)]
        db_path: Option<PathBuf>,

        #[arg(long)]
        guard: Option<GuardMode>,
    },
}
