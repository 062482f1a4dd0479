// askql/src/commands/mod.rs

pub mod ask;
pub mod init;
pub mod query;
pub mod render;
pub mod serve;

use askql_core::domain::GuardMode;
use askql_core::infrastructure::config::{AppConfig, load_app_config};
use miette::Result;
use std::path::{Path, PathBuf};

/// Flags that win over askql.yaml and ASKQL_* variables.
#[derive(Debug, Default)]
pub struct Overrides {
    pub db_path: Option<PathBuf>,
    pub guard: Option<GuardMode>,
    pub bind: Option<String>,
}

pub fn resolve_config(overrides: Overrides) -> Result<AppConfig> {
    let mut config = load_app_config(Path::new("."))?;

    if let Some(db_path) = overrides.db_path {
        config.db_path = db_path;
    }
    if let Some(guard) = overrides.guard {
        config.guard = guard;
    }
    if let Some(bind) = overrides.bind {
        config.bind = bind;
    }

    Ok(config)
}
