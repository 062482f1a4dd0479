// askql-core/src/application/mod.rs

pub mod bootstrap;
pub mod engine;
pub mod pipeline;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use askql_core::application::{init_database, execute_query, AskPipeline};`

pub use bootstrap::{BootstrapReport, init_database};
pub use engine::execute_query;
pub use pipeline::{Answer, AskPipeline};
