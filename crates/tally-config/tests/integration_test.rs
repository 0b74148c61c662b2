//! Integration tests for tally-config crate.

use tally_config::{Config, ConfigLoader, ConfigValidator};

#[test]
fn test_default_config_validation() {
    let mut config = Config::default();

    // Default config should fail validation due to the empty token
    assert!(config.validate().is_err());

    config.discord.token = "test_token".to_string();

    // Now it should pass
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_values() {
    let config = Config::default();

    assert_eq!(config.discord.command_prefix, "!");
    assert_eq!(config.database.path, "tally-bot.sqlite");
    assert!(config.discord.token.is_empty());
}

#[test]
fn test_validator_rejects_blank_fields() {
    let mut config = Config::default();
    config.discord.token = "test_token".to_string();
    assert!(ConfigValidator::validate(&config).is_ok());

    config.discord.command_prefix = String::new();
    assert!(ConfigValidator::validate(&config).is_err());

    config.discord.command_prefix = "!".to_string();
    config.database.path = String::new();
    assert!(ConfigValidator::validate(&config).is_err());
}

#[tokio::test]
async fn test_loader_reads_yaml_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(
        file.path(),
        concat!(
            "discord:\n",
            "  token: \"abc123\"\n",
            "database:\n",
            "  path: \"/tmp/tally-test.sqlite\"\n",
        ),
    )
    .unwrap();

    let config = ConfigLoader::new(file.path()).load().await.unwrap();

    assert_eq!(config.discord.token, "abc123");
    assert_eq!(config.database.path, "/tmp/tally-test.sqlite");
    // Fields missing from the file keep their defaults
    assert_eq!(config.discord.command_prefix, "!");
}

#[tokio::test]
async fn test_loader_fills_defaults_for_partial_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "discord:\n  token: \"abc123\"\n").unwrap();

    let config = ConfigLoader::new(file.path()).load().await.unwrap();

    assert_eq!(config.discord.token, "abc123");
    assert_eq!(config.database.path, "tally-bot.sqlite");
    assert!(config.validate().is_ok());
}

#[tokio::test]
async fn test_loader_rejects_malformed_yaml() {
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "discord: [not, a, mapping\n").unwrap();

    let result = ConfigLoader::new(file.path()).load().await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_loader_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new(dir.path().join("does-not-exist.yaml"))
        .load()
        .await;
    assert!(result.is_err());
}
