// askql-core/src/infrastructure/config/app.rs

// Layered settings: defaults, then askql.yaml, then ASKQL_* variables.
// CLI flags are applied on top by the binary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::dialect::SqlDialect;
use crate::domain::guard::GuardMode;
use crate::infrastructure::adapters::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::infrastructure::error::InfrastructureError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct AppConfig {
    #[serde(rename = "db-path", default = "default_db_path")]
    pub db_path: PathBuf,

    /// Engine holding STUDENT; also the SQL dialect asked of the model.
    #[serde(default)]
    pub dialect: SqlDialect,

    #[validate(length(min = 1, message = "model cannot be empty"))]
    #[serde(default = "default_model")]
    pub model: String,

    #[validate(url)]
    #[serde(rename = "api-base-url", default = "default_base_url")]
    pub api_base_url: String,

    #[serde(default)]
    pub guard: GuardMode,

    #[validate(length(min = 1, message = "bind address cannot be empty"))]
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Line shown under the page title.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            dialect: SqlDialect::default(),
            model: default_model(),
            api_base_url: default_base_url(),
            guard: GuardMode::default(),
            bind: default_bind(),
            subtitle: default_subtitle(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("student.db")
}
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
fn default_bind() -> String {
    "127.0.0.1:8501".to_string()
}
fn default_subtitle() -> String {
    "C.U. Shah Polytechnic – Surendranagar".to_string()
}

pub fn load_app_config(dir: &Path) -> Result<AppConfig, InfrastructureError> {
    load_app_config_with(dir, |key| std::env::var(key).ok())
}

/// Same as [`load_app_config`] with the environment read through `lookup`.
#[instrument(skip(lookup))]
pub fn load_app_config_with<F>(dir: &Path, lookup: F) -> Result<AppConfig, InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match find_config_file(dir) {
        Some(path) => {
            info!(path = ?path, "Loading askql configuration");
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut config, lookup)?;
    config.validate()?;

    Ok(config)
}

fn find_config_file(dir: &Path) -> Option<PathBuf> {
    ["askql.yaml", "askql.yml"]
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.exists())
}

/// `lookup` is `std::env::var` in production and a map in tests.
pub(crate) fn apply_env_overrides<F>(
    config: &mut AppConfig,
    lookup: F,
) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup("ASKQL_DB_PATH") {
        info!(old = ?config.db_path, new = ?val, "Overriding db path via ENV");
        config.db_path = PathBuf::from(val);
    }
    if let Some(val) = lookup("ASKQL_DIALECT") {
        config.dialect = val
            .parse()
            .map_err(|e: crate::domain::DomainError| InfrastructureError::ConfigError(e.to_string()))?;
    }
    if let Some(val) = lookup("ASKQL_MODEL") {
        info!(old = ?config.model, new = ?val, "Overriding model via ENV");
        config.model = val;
    }
    if let Some(val) = lookup("ASKQL_API_BASE_URL") {
        config.api_base_url = val;
    }
    if let Some(val) = lookup("ASKQL_GUARD") {
        config.guard = val
            .parse()
            .map_err(|e: crate::domain::DomainError| InfrastructureError::ConfigError(e.to_string()))?;
    }
    if let Some(val) = lookup("ASKQL_BIND") {
        config.bind = val;
    }
    Ok(())
}

/// The model API key. Its absence is fatal for anything that calls the model.
pub fn api_key_from_env() -> Result<String, InfrastructureError> {
    match std::env::var(API_KEY_VAR) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(InfrastructureError::MissingApiKey(API_KEY_VAR.to_string())),
    }
}
