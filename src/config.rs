//! Startup configuration — resolved once, before any window is shown.
//!
//! Reads `~/.config/glimpse/config.json` (camelCase keys), with
//! `ANTHROPIC_API_KEY` from the environment as a fallback for the
//! credential. A missing credential is a fatal startup error.

use std::fs;
use std::path::PathBuf;

use dirs::config_dir;
use serde::Deserialize;
use thiserror::Error;

use crate::llm::prompts::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};

const APP_CONFIG_DIR_NAME: &str = "glimpse";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("apiKey missing — set it in config.json or the ANTHROPIC_API_KEY environment variable")]
    MissingApiKey,
}

/// On-disk shape; every field optional so partial files parse.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawConfig {
    api_key: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
}

/// Fully resolved configuration, fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
}

pub fn load() -> Result<Config, ConfigError> {
    let raw = read_config_file()?;
    resolve(raw, std::env::var("ANTHROPIC_API_KEY").ok())
}

fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(APP_CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn read_config_file() -> Result<RawConfig, ConfigError> {
    let Some(path) = config_file_path() else {
        return Ok(RawConfig::default());
    };
    if !path.exists() {
        return Ok(RawConfig::default());
    }
    let data = fs::read_to_string(&path)?;
    Ok(serde_json::from_str(&data)?)
}

fn resolve(raw: RawConfig, env_key: Option<String>) -> Result<Config, ConfigError> {
    let api_key = raw
        .api_key
        .filter(|k| !k.is_empty())
        .or_else(|| env_key.filter(|k| !k.is_empty()))
        .ok_or(ConfigError::MissingApiKey)?;

    let model = match raw.model {
        Some(model) if !model.is_empty() => model,
        _ => {
            log::info!("Model not specified in config, using default: {DEFAULT_MODEL}");
            DEFAULT_MODEL.to_string()
        }
    };

    Ok(Config {
        api_key,
        model,
        max_tokens: raw.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_fatal() {
        let result = resolve(RawConfig::default(), None);
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let raw = RawConfig {
            api_key: Some(String::new()),
            ..RawConfig::default()
        };
        let result = resolve(raw, Some(String::new()));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn env_credential_backs_up_the_file() {
        let config = resolve(RawConfig::default(), Some("sk-test".into())).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.max_tokens, DEFAULT_MAX_TOKENS);
    }

    #[test]
    fn file_values_win_over_defaults() {
        let raw: RawConfig = serde_json::from_str(
            r#"{"apiKey": "sk-file", "model": "claude-test-1", "maxTokens": 1234}"#,
        )
        .unwrap();
        let config = resolve(raw, Some("sk-env".into())).unwrap();
        assert_eq!(config.api_key, "sk-file");
        assert_eq!(config.model, "claude-test-1");
        assert_eq!(config.max_tokens, 1234);
    }

    #[test]
    fn partial_file_parses_with_defaults() {
        let raw: RawConfig = serde_json::from_str(r#"{"apiKey": "sk-only"}"#).unwrap();
        let config = resolve(raw, None).unwrap();
        assert_eq!(config.api_key, "sk-only");
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
