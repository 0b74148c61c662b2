//! Configuration loading from YAML files.

use crate::schema::Config;
use tally_common::TallyError;
use tracing::debug;

/// Configuration loader reading a YAML file from disk.
///
/// The loader only parses; validation happens after the caller has applied
/// environment overrides on top of the file contents.
pub struct ConfigLoader {
    path: std::path::PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads configuration from file.
    ///
    /// Missing fields fall back to their defaults, so a partial file that
    /// only sets the token is enough to run.
    pub async fn load(&self) -> Result<Config, TallyError> {
        debug!("Loading configuration from {}", self.path.display());

        let raw = tokio::fs::read_to_string(&self.path).await?;
        let config: Config =
            serde_yaml::from_str(&raw).map_err(|e| TallyError::Serialization(e.to_string()))?;

        Ok(config)
    }
}
