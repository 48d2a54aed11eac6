#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::DEFAULT_BASE_URL;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use toml_config::{LogFormat, TomlConfig};

pub const BASE_URL_ENV: &str = "GPT_SYNC_BASE_URL";

/// 已解析完成的用戶端配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            verbose: false,
            log_format: LogFormat::Compact,
        }
    }
}

impl ClientConfig {
    /// 依序採用: 明確指定 > 環境變數 `GPT_SYNC_BASE_URL` > 設定檔 > 預設值
    pub fn load(base_url: Option<String>, config_file: Option<&Path>) -> Result<Self> {
        let file = match config_file {
            Some(path) => {
                tracing::debug!("Loading client config from {}", path.display());
                Some(TomlConfig::from_file(path)?)
            }
            None => None,
        };
        let env_base_url = std::env::var(BASE_URL_ENV).ok();

        let config = Self::resolve(base_url, env_base_url, file.as_ref());
        config.validate()?;
        Ok(config)
    }

    pub fn resolve(
        base_url: Option<String>,
        env_base_url: Option<String>,
        file: Option<&TomlConfig>,
    ) -> Self {
        let defaults = Self::default();
        let non_blank = |value: Option<String>| value.filter(|url| !url.trim().is_empty());
        let base_url = non_blank(base_url)
            .or_else(|| non_blank(env_base_url))
            .or_else(|| file.and_then(|f| f.base_url.clone()))
            .unwrap_or(defaults.base_url);

        Self {
            base_url,
            verbose: file.map(TomlConfig::verbose).unwrap_or(defaults.verbose),
            log_format: file.map(TomlConfig::log_format).unwrap_or(defaults.log_format),
        }
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with(base_url: &str) -> TomlConfig {
        TomlConfig {
            base_url: Some(base_url.to_string()),
            log: None,
        }
    }

    #[test]
    fn defaults_to_local_backend() {
        let config = ClientConfig::resolve(None, None, None);
        assert_eq!(config.base_url, "http://localhost:7000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn explicit_value_wins_over_env_and_file() {
        let file = file_with("http://file:7000");
        let config = ClientConfig::resolve(
            Some("http://flag:7000".to_string()),
            Some("http://env:7000".to_string()),
            Some(&file),
        );
        assert_eq!(config.base_url, "http://flag:7000");
    }

    #[test]
    fn env_wins_over_file() {
        let file = file_with("http://file:7000");
        let config = ClientConfig::resolve(None, Some("http://env:7000".to_string()), Some(&file));
        assert_eq!(config.base_url, "http://env:7000");
    }

    #[test]
    fn file_wins_over_default() {
        let file = file_with("http://file:7000");
        let config = ClientConfig::resolve(None, None, Some(&file));
        assert_eq!(config.base_url, "http://file:7000");
    }

    #[test]
    fn blank_env_is_ignored() {
        let config = ClientConfig::resolve(None, Some("  ".to_string()), None);
        assert_eq!(config.base_url, "http://localhost:7000");
    }

    #[test]
    fn invalid_url_fails_validation() {
        let config = ClientConfig::resolve(Some("not a url".to_string()), None, None);
        assert!(config.validate().is_err());
    }

    #[test]
    fn client_from_config_uses_resolved_url() {
        let config = ClientConfig::resolve(Some("http://127.0.0.1:8123/".to_string()), None, None);
        let client = crate::core::SyncApiClient::from_config(&config);
        assert_eq!(client.base_url(), "http://127.0.0.1:8123");
    }
}
