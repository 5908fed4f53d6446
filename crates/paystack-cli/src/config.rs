/*
[INPUT]:  YAML configuration file, PAYSTACK_SECRET_KEY environment variable
[OUTPUT]: Resolved client configuration and secret key
[POS]:    Configuration layer - CLI setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use paystack_adapter::ClientConfig;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured secret key
pub const SECRET_KEY_ENV: &str = "PAYSTACK_SECRET_KEY";

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// Paystack secret key (sk_test_... or sk_live_...)
    #[serde(default)]
    pub secret_key: Option<String>,
    /// API base URL, defaults to the live Paystack endpoint
    #[serde(default)]
    pub base_url: Option<String>,
    /// Whole-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content).context("parse config yaml")?;
        Ok(config)
    }

    /// Load an explicit config file, or the default one when it exists
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Replace the secret key with `env_key` when it is set and non-empty
    pub fn with_secret_key_override(mut self, env_key: Option<String>) -> Self {
        if let Some(key) = env_key.filter(|key| !key.trim().is_empty()) {
            self.secret_key = Some(key);
        }
        self
    }

    pub fn secret_key(&self) -> Result<&str> {
        match self.secret_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => bail!("no secret key configured; set {SECRET_KEY_ENV} or secret_key in the config file"),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }
}

/// `<config dir>/paystack/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("paystack").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use paystack_adapter::http::DEFAULT_BASE_URL;

    #[test]
    fn parses_full_config() {
        let config: CliConfig = serde_yaml::from_str(
            "secret_key: sk_test_abc\nbase_url: http://localhost:9000\ntimeout_secs: 5\n",
        )
        .expect("config should parse");

        assert_eq!(config.secret_key().expect("key"), "sk_test_abc");
        let client_config = config.client_config();
        assert_eq!(client_config.base_url, "http://localhost:9000");
        assert_eq!(client_config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn empty_config_uses_client_defaults() {
        let config: CliConfig = serde_yaml::from_str("{}").expect("config should parse");

        assert!(config.secret_key().is_err());
        let client_config = config.client_config();
        assert_eq!(client_config.base_url, DEFAULT_BASE_URL);
        assert_eq!(client_config.timeout, ClientConfig::default().timeout);
    }

    #[test]
    fn env_key_overrides_file_key() {
        let config = CliConfig {
            secret_key: Some("sk_test_file".to_string()),
            ..Default::default()
        };

        let overridden = config
            .clone()
            .with_secret_key_override(Some("sk_test_env".to_string()));
        assert_eq!(overridden.secret_key().expect("key"), "sk_test_env");

        let untouched = config.with_secret_key_override(Some("  ".to_string()));
        assert_eq!(untouched.secret_key().expect("key"), "sk_test_file");
    }

    #[test]
    fn from_file_reads_yaml() {
        let path = std::env::temp_dir().join(format!("paystack-cli-{}.yaml", std::process::id()));
        std::fs::write(&path, "secret_key: sk_test_disk\n").expect("write config");

        let config = CliConfig::load(Some(&path)).expect("load config");
        std::fs::remove_file(&path).ok();

        assert_eq!(config.secret_key().expect("key"), "sk_test_disk");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("paystack-cli-does-not-exist.yaml");
        assert!(CliConfig::load(Some(&path)).is_err());
    }
}
