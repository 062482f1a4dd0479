// askql-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Traits)
// Contracts the application needs: a SQL connector and a SQL generator.
pub mod ports;

// 2. Domain
// Student records, outcome classification, SQL dialects, statement guard.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// SQLite and DuckDB, OpenAI, prompt rendering, configuration files.
pub mod infrastructure;

// 4. Application (Use Cases)
// Bootstrap, ad-hoc execution, the ask pipeline.
pub mod application;

// --- GLOBAL ERROR ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::AskqlError;
