// src/config.rs
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::error::DomainResult;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiOpts {
    /// Base URL of the completion service (default: the OpenAI API)
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Model used for tag extraction (default: "gpt-4o-mini")
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_api_base() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

impl Default for OpenAiOpts {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            model: default_model(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Path to the SQLite database file
    #[serde(default = "default_db_path")]
    pub db_url: String,

    /// Listen address for the HTTP API (`serve` subcommand)
    #[serde(default = "default_http_addr")]
    pub http_addr: String,

    /// Options for the tag extraction model
    #[serde(default)]
    pub openai: OpenAiOpts,
}

fn default_db_path() -> String {
    let db_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config/ticklist");

    // Ensure directory exists
    std::fs::create_dir_all(&db_dir).ok();

    db_dir
        .join("ticklist.db")
        .to_str()
        .unwrap_or("ticklist.db")
        .to_string()
}

fn default_http_addr() -> String {
    "127.0.0.1:3030".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_url: default_db_path(),
            http_addr: default_http_addr(),
            openai: OpenAiOpts::default(),
        }
    }
}

/// Load settings: defaults, then the config file (explicit path or
/// `~/.config/ticklist/config.toml`), then environment variables.
pub fn load_settings(config_path: Option<&Path>) -> DomainResult<Settings> {
    trace!("Loading settings");

    let mut settings = Settings::default();

    let config_sources: Vec<PathBuf> = match config_path {
        Some(explicit) => vec![explicit.to_path_buf()],
        None => dirs::home_dir()
            .map(|p| p.join(".config/ticklist/config.toml"))
            .into_iter()
            .collect(),
    };

    for config_path in &config_sources {
        if config_path.exists() {
            trace!("Loading config from: {:?}", config_path);

            if let Ok(config_text) = std::fs::read_to_string(config_path) {
                if let Ok(file_settings) = toml::from_str::<Settings>(&config_text) {
                    settings = file_settings;
                }
            }
        }
    }

    // Override with environment variables
    if let Ok(db_url) = std::env::var("TICKLIST_DB_URL") {
        trace!("Using TICKLIST_DB_URL from environment: {}", db_url);
        settings.db_url = db_url;
    }

    if let Ok(http_addr) = std::env::var("TICKLIST_HTTP_ADDR") {
        trace!("Using TICKLIST_HTTP_ADDR from environment: {}", http_addr);
        settings.http_addr = http_addr;
    }

    trace!("Settings loaded: {:?}", settings);
    Ok(settings)
}

pub fn generate_default_config() -> String {
    let default_settings = Settings::default();
    toml::to_string_pretty(&default_settings)
        .unwrap_or_else(|_| "# Error generating default configuration".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::EnvGuard;
    use serial_test::serial;
    use std::env;
    use std::fs;

    #[test]
    #[serial]
    fn given_no_overrides_when_loaded_then_defaults_apply() {
        let _guard = EnvGuard::new();
        env::remove_var("TICKLIST_DB_URL");
        env::remove_var("TICKLIST_HTTP_ADDR");

        let settings = load_settings(None).unwrap();

        assert!(settings.db_url.contains("ticklist.db"));
        assert_eq!(settings.http_addr, "127.0.0.1:3030");
        assert_eq!(settings.openai.model, "gpt-4o-mini");
        assert_eq!(settings.openai.api_base, "https://api.openai.com");
    }

    #[test]
    #[serial]
    fn given_environment_variables_when_loaded_then_they_override_defaults() {
        let _guard = EnvGuard::new();

        env::set_var("TICKLIST_DB_URL", "/test/custom.db");
        env::set_var("TICKLIST_HTTP_ADDR", "0.0.0.0:8080");

        let settings = load_settings(None).unwrap();

        assert_eq!(settings.db_url, "/test/custom.db");
        assert_eq!(settings.http_addr, "0.0.0.0:8080");
    }

    #[test]
    #[serial]
    fn given_explicit_config_file_when_loaded_then_values_apply() {
        let _guard = EnvGuard::new();
        env::remove_var("TICKLIST_DB_URL");
        env::remove_var("TICKLIST_HTTP_ADDR");

        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
            db_url = "/config/file/path.db"
            http_addr = "127.0.0.1:9999"

            [openai]
            api_base = "https://proxy.example.com"
            model = "gpt-4o"
            "#,
        )
        .unwrap();

        let settings = load_settings(Some(&config_path)).unwrap();

        assert_eq!(settings.db_url, "/config/file/path.db");
        assert_eq!(settings.http_addr, "127.0.0.1:9999");
        assert_eq!(settings.openai.api_base, "https://proxy.example.com");
        assert_eq!(settings.openai.model, "gpt-4o");
    }

    #[test]
    #[serial]
    fn given_config_file_and_env_when_loaded_then_env_wins() {
        let _guard = EnvGuard::new();

        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "db_url = \"/config/non-override.db\"\n").unwrap();

        env::set_var("TICKLIST_DB_URL", "/env/override.db");
        env::remove_var("TICKLIST_HTTP_ADDR");

        let settings = load_settings(Some(&config_path)).unwrap();

        assert_eq!(settings.db_url, "/env/override.db");
    }

    #[test]
    fn given_default_config_when_generated_then_it_parses_back() {
        let generated = generate_default_config();
        let parsed: Settings = toml::from_str(&generated).unwrap();
        assert_eq!(parsed.http_addr, default_http_addr());
    }
}
