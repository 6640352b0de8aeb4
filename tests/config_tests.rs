//! Configuration loading from files and the environment

use aws_blocks::blocks::BlockContext;
use aws_blocks::client::{ClientConfig, Credentials};
use aws_blocks::config::Config;
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;

const AWS_ENV: [&str; 8] = [
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
    "AWS_ENDPOINT_URL",
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "AWS_BLOCKS_CONFIG",
    "AWS_BLOCKS_LOG_LEVEL",
];

fn clear_env() {
    for var in AWS_ENV {
        std::env::remove_var(var);
    }
}

fn config_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const FILE: &str = r#"
[credentials]
access_key_id = "file-key"
secret_access_key = "file-secret"

[defaults]
region = "eu-west-1"

[logging]
level = "debug"
"#;

#[test]
#[serial]
fn test_load_explicit_file() {
    clear_env();
    let file = config_file(FILE);
    let config = Config::load(Some(&file.path().to_path_buf())).unwrap();

    assert_eq!(config.credentials.access_key_id.as_deref(), Some("file-key"));
    assert_eq!(config.defaults.region.as_deref(), Some("eu-west-1"));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.http.timeout_secs, 60);
}

#[test]
#[serial]
fn test_environment_wins_over_file() {
    clear_env();
    std::env::set_var("AWS_ACCESS_KEY_ID", "env-key");
    std::env::set_var("AWS_DEFAULT_REGION", "ap-south-1");
    std::env::set_var("AWS_BLOCKS_LOG_LEVEL", "trace");

    let file = config_file(FILE);
    let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
    clear_env();

    assert_eq!(config.credentials.access_key_id.as_deref(), Some("env-key"));
    assert_eq!(
        config.credentials.secret_access_key.as_deref(),
        Some("file-secret")
    );
    assert_eq!(config.defaults.region.as_deref(), Some("ap-south-1"));
    assert_eq!(config.logging.level, "trace");
}

#[test]
#[serial]
fn test_config_path_from_environment() {
    clear_env();
    let file = config_file(FILE);
    std::env::set_var("AWS_BLOCKS_CONFIG", file.path());
    let config = Config::load(None).unwrap();
    clear_env();

    assert_eq!(config.defaults.region.as_deref(), Some("eu-west-1"));
}

#[test]
#[serial]
fn test_missing_explicit_file_is_skipped() {
    clear_env();
    let config = Config::load(Some(&PathBuf::from("/nonexistent/aws-blocks.toml"))).unwrap();
    assert!(config.credentials.access_key_id.is_none());
}

#[test]
#[serial]
fn test_context_from_config() {
    clear_env();
    let file = config_file(
        r#"
[credentials]
access_key_id = "A"
secret_access_key = "B"
session_token = "C"
endpoint = "http://localhost:4566"
"#,
    );
    let config = Config::load(Some(&file.path().to_path_buf())).unwrap();
    let context = BlockContext::from_config(&config);

    assert_eq!(
        context.client_config("us-east-1"),
        ClientConfig {
            region: "us-east-1".to_string(),
            credentials: Credentials::new("A", "B", Some("C".to_string())),
            endpoint: Some("http://localhost:4566".to_string()),
        }
    );
}
