//! Configuration module for aws-blocks
//!
//! Handles loading and merging configuration from multiple sources:
//! - Default values
//! - System configuration (/etc/aws-blocks/config.toml)
//! - User configuration (~/.aws-blocks/config.toml)
//! - Project configuration (./aws-blocks.toml)
//! - Explicit file (`--config` or `AWS_BLOCKS_CONFIG`)
//! - Environment variables

use crate::client::Credentials;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Credentials and endpoint shared by every invocation
    pub credentials: CredentialsConfig,

    /// Default settings
    pub defaults: Defaults,

    /// HTTP transport settings
    pub http: HttpSettings,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// App-level AWS credentials
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    /// Custom endpoint replacing every service's default URL
    pub endpoint: Option<String>,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("access_key_id", &self.access_key_id)
            .field(
                "secret_access_key",
                &self.secret_access_key.as_ref().map(|_| "<redacted>"),
            )
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl CredentialsConfig {
    /// Static credentials for signing; unset keys become empty strings.
    pub fn to_credentials(&self) -> Credentials {
        Credentials::new(
            self.access_key_id.clone().unwrap_or_default(),
            self.secret_access_key.clone().unwrap_or_default(),
            self.session_token.clone(),
        )
    }

    /// Whether both halves of the access key pair are set.
    pub fn is_complete(&self) -> bool {
        self.access_key_id.as_deref().is_some_and(|k| !k.is_empty())
            && self
                .secret_access_key
                .as_deref()
                .is_some_and(|k| !k.is_empty())
    }
}

/// Default configuration values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Region used when an input config has none
    pub region: Option<String>,
}

/// HTTP transport settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpSettings {
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            connect_timeout_secs: 10,
            user_agent: format!("aws-blocks/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no `-v` flag or `RUST_LOG` is given
    pub level: String,

    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "text".to_string(),
        }
    }
}

/// A configuration file as written: only the keys it sets are `Some`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    credentials: CredentialsConfig,
    defaults: Defaults,
    http: HttpFile,
    logging: LoggingFile,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct HttpFile {
    timeout_secs: Option<u64>,
    connect_timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingFile {
    level: Option<String>,
    format: Option<String>,
}

impl Config {
    /// Load configuration from all sources
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Config::default();

        for path in Self::get_config_paths(config_path) {
            if path.exists() {
                config = config.merge_from_file(&path)?;
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    /// Configuration files in increasing order of precedence
    fn get_config_paths(explicit_path: Option<&PathBuf>) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("/etc/aws-blocks/config.toml")];

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".aws-blocks/config.toml"));
        }

        paths.push(PathBuf::from("aws-blocks.toml"));

        match explicit_path {
            Some(path) => paths.push(path.clone()),
            None => {
                if let Ok(env_config) = std::env::var("AWS_BLOCKS_CONFIG") {
                    paths.push(PathBuf::from(env_config));
                }
            }
        }

        paths
    }

    /// Merge configuration from a file
    fn merge_from_file(&self, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let file_config: ConfigFile = match extension {
            "yml" | "yaml" => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
            "json" => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
            _ => toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?,
        };

        Ok(self.merge(file_config))
    }

    /// Merge a file into this config; keys the file sets win
    fn merge(&self, other: ConfigFile) -> Config {
        Config {
            credentials: CredentialsConfig {
                access_key_id: other
                    .credentials
                    .access_key_id
                    .or_else(|| self.credentials.access_key_id.clone()),
                secret_access_key: other
                    .credentials
                    .secret_access_key
                    .or_else(|| self.credentials.secret_access_key.clone()),
                session_token: other
                    .credentials
                    .session_token
                    .or_else(|| self.credentials.session_token.clone()),
                endpoint: other
                    .credentials
                    .endpoint
                    .or_else(|| self.credentials.endpoint.clone()),
            },
            defaults: Defaults {
                region: other
                    .defaults
                    .region
                    .or_else(|| self.defaults.region.clone()),
            },
            http: HttpSettings {
                timeout_secs: other.http.timeout_secs.unwrap_or(self.http.timeout_secs),
                connect_timeout_secs: other
                    .http
                    .connect_timeout_secs
                    .unwrap_or(self.http.connect_timeout_secs),
                user_agent: other
                    .http
                    .user_agent
                    .unwrap_or_else(|| self.http.user_agent.clone()),
            },
            logging: LoggingConfig {
                level: other
                    .logging
                    .level
                    .unwrap_or_else(|| self.logging.level.clone()),
                format: other
                    .logging
                    .format
                    .unwrap_or_else(|| self.logging.format.clone()),
            },
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Some(key) = non_empty_var("AWS_ACCESS_KEY_ID") {
            self.credentials.access_key_id = Some(key);
        }

        if let Some(secret) = non_empty_var("AWS_SECRET_ACCESS_KEY") {
            self.credentials.secret_access_key = Some(secret);
        }

        if let Some(token) = non_empty_var("AWS_SESSION_TOKEN") {
            self.credentials.session_token = Some(token);
        }

        if let Some(endpoint) = non_empty_var("AWS_ENDPOINT_URL") {
            self.credentials.endpoint = Some(endpoint);
        }

        // AWS_REGION wins over AWS_DEFAULT_REGION
        if let Some(region) =
            non_empty_var("AWS_REGION").or_else(|| non_empty_var("AWS_DEFAULT_REGION"))
        {
            self.defaults.region = Some(region);
        }

        if let Some(level) = non_empty_var("AWS_BLOCKS_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Load from a specific file, without other sources
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Config::default().merge_from_file(path.as_ref())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    const ENV_VARS: [&str; 7] = [
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "AWS_SESSION_TOKEN",
        "AWS_ENDPOINT_URL",
        "AWS_REGION",
        "AWS_DEFAULT_REGION",
        "AWS_BLOCKS_LOG_LEVEL",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.timeout_secs, 60);
        assert_eq!(config.http.connect_timeout_secs, 10);
        assert_eq!(config.logging.level, "warn");
        assert!(config.credentials.endpoint.is_none());
        assert!(!config.credentials.is_complete());
    }

    #[test]
    fn test_from_toml_file() {
        let file = write_config(
            ".toml",
            r#"
[credentials]
access_key_id = "AKID"
secret_access_key = "secret"
endpoint = "http://localhost:4566"

[defaults]
region = "eu-west-1"

[http]
timeout_secs = 5
"#,
        );
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.credentials.access_key_id.as_deref(), Some("AKID"));
        assert_eq!(
            config.credentials.endpoint.as_deref(),
            Some("http://localhost:4566")
        );
        assert_eq!(config.defaults.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.connect_timeout_secs, 10);
        assert!(config.credentials.is_complete());
    }

    #[test]
    fn test_from_yaml_and_json_files() {
        let yaml = write_config(
            ".yaml",
            "credentials:\n  access_key_id: A\n  session_token: C\nlogging:\n  format: json\n",
        );
        let config = Config::from_file(yaml.path()).unwrap();
        assert_eq!(config.credentials.session_token.as_deref(), Some("C"));
        assert_eq!(config.logging.format, "json");

        let json = write_config(".json", r#"{"defaults": {"region": "us-west-2"}}"#);
        let config = Config::from_file(json.path()).unwrap();
        assert_eq!(config.defaults.region.as_deref(), Some("us-west-2"));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let file = write_config(".toml", "credentials = [");
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_merge() {
        let base = Config {
            credentials: CredentialsConfig {
                access_key_id: Some("base".to_string()),
                session_token: Some("token".to_string()),
                ..Default::default()
            },
            ..Config::default()
        };
        let other = ConfigFile {
            credentials: CredentialsConfig {
                access_key_id: Some("override".to_string()),
                ..Default::default()
            },
            http: HttpFile {
                timeout_secs: Some(15),
                ..Default::default()
            },
            ..Default::default()
        };

        let merged = base.merge(other);
        assert_eq!(merged.credentials.access_key_id.as_deref(), Some("override"));
        assert_eq!(merged.credentials.session_token.as_deref(), Some("token"));
        assert_eq!(merged.http.timeout_secs, 15);
        assert_eq!(merged.http.connect_timeout_secs, 10);
        assert_eq!(merged.logging, LoggingConfig::default());
    }

    #[test]
    fn test_later_file_restores_default_values() {
        let lower = write_config(
            ".toml",
            "[http]\ntimeout_secs = 5\n\n[logging]\nlevel = \"debug\"\nformat = \"json\"\n",
        );
        let higher = write_config(
            ".toml",
            "[http]\ntimeout_secs = 60\n\n[logging]\nlevel = \"warn\"\n",
        );

        let config = Config::default()
            .merge_from_file(lower.path())
            .and_then(|c| c.merge_from_file(higher.path()))
            .unwrap();
        assert_eq!(config.http.timeout_secs, 60);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    #[serial]
    fn test_env_override() {
        clear_env();
        std::env::set_var("AWS_ACCESS_KEY_ID", "A");
        std::env::set_var("AWS_SECRET_ACCESS_KEY", "B");
        std::env::set_var("AWS_SESSION_TOKEN", "C");
        std::env::set_var("AWS_ENDPOINT_URL", "http://localhost:4566");
        std::env::set_var("AWS_DEFAULT_REGION", "eu-west-1");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(
            config.credentials.to_credentials(),
            Credentials::new("A", "B", Some("C".to_string()))
        );
        assert_eq!(
            config.credentials.endpoint.as_deref(),
            Some("http://localhost:4566")
        );
        assert_eq!(config.defaults.region.as_deref(), Some("eu-west-1"));

        std::env::set_var("AWS_REGION", "us-east-2");
        config.apply_env_overrides();
        assert_eq!(config.defaults.region.as_deref(), Some("us-east-2"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_env_values_ignored() {
        clear_env();
        std::env::set_var("AWS_ENDPOINT_URL", "");
        let mut config = Config::default();
        config.apply_env_overrides();
        assert!(config.credentials.endpoint.is_none());
        clear_env();
    }

    #[test]
    fn test_credentials_config_debug_redacts() {
        let creds = CredentialsConfig {
            access_key_id: Some("AKID".to_string()),
            secret_access_key: Some("hunter2".to_string()),
            ..Default::default()
        };
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("AKID"));
        assert!(!rendered.contains("hunter2"));
    }
}
