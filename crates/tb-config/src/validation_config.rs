use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;
use tb_core::Limits;

// Validation constraints
pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 200;
pub const DEFAULT_MAX_NAME_LENGTH: usize = tb_core::limits::DEFAULT_MAX_NAME_LENGTH;

pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = tb_core::limits::DEFAULT_MAX_TITLE_LENGTH;

pub const MIN_DESCRIPTION_LENGTH: usize = 0;
pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize =
    tb_core::limits::DEFAULT_MAX_DESCRIPTION_LENGTH;

/// Field length limits for user input.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Board and column names, user emails
    pub max_name_length: usize,
    /// Task and subtask titles
    pub max_title_length: usize,
    pub max_description_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range(
            "validation.max_name_length",
            self.max_name_length,
            MIN_NAME_LENGTH,
            MAX_NAME_LENGTH,
        )?;
        Self::check_range(
            "validation.max_title_length",
            self.max_title_length,
            MIN_TITLE_LENGTH,
            MAX_TITLE_LENGTH,
        )?;
        Self::check_range(
            "validation.max_description_length",
            self.max_description_length,
            MIN_DESCRIPTION_LENGTH,
            MAX_DESCRIPTION_LENGTH,
        )
    }

    pub fn limits(&self) -> Limits {
        Limits {
            max_name_length: self.max_name_length,
            max_title_length: self.max_title_length,
            max_description_length: self.max_description_length,
        }
    }

    #[track_caller]
    fn check_range(name: &str, value: usize, min: usize, max: usize) -> ConfigErrorResult<()> {
        if value < min || value > max {
            return Err(ConfigError::config(format!(
                "{name} must be {min}-{max}, got {value}"
            )));
        }
        Ok(())
    }
}
