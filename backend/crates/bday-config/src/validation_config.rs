use crate::{ConfigError, ConfigErrorResult};

use bday_core::DEFAULT_MAX_USERNAME_LENGTH;
use serde::Deserialize;

pub const MIN_USERNAME_LENGTH: usize = 1;
pub const MAX_USERNAME_LENGTH: usize = 255;

/// Input limits applied on the write path
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum number of characters in a username
    pub max_username_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_username_length: DEFAULT_MAX_USERNAME_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_username_length < MIN_USERNAME_LENGTH
            || self.max_username_length > MAX_USERNAME_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.max_username_length must be {}-{}, got {}",
                MIN_USERNAME_LENGTH, MAX_USERNAME_LENGTH, self.max_username_length
            )));
        }

        Ok(())
    }
}
