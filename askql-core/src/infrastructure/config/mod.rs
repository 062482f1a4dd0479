pub mod app;

pub use app::{API_KEY_VAR, AppConfig, api_key_from_env, load_app_config, load_app_config_with};
