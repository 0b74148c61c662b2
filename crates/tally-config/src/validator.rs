//! Runtime configuration validation.

use crate::schema::Config;
use tally_common::TallyError;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a configuration.
    pub fn validate(config: &Config) -> Result<(), TallyError> {
        config.validate()
    }
}
