// askql-core/src/ports/mod.rs

pub mod connector;
pub mod generator;

pub use connector::Connector;
pub use generator::SqlGenerator;
