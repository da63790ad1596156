use crate::{CoreError, CoreResult};

pub const DEFAULT_MAX_NAME_LENGTH: usize = 60;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 200;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 10000;

/// Field length limits applied to every user-supplied string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Board and column names, user emails
    pub max_name_length: usize,
    /// Task and subtask titles
    pub max_title_length: usize,
    pub max_description_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
        }
    }
}

impl Limits {
    /// Trim `value`, reject blanks, then enforce `max` characters.
    #[track_caller]
    pub fn required(&self, field: &'static str, value: &str, max: usize) -> CoreResult<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CoreError::empty_field(field));
        }
        Self::bounded(field, trimmed, max)?;
        Ok(trimmed.to_string())
    }

    #[track_caller]
    pub fn name(&self, field: &'static str, value: &str) -> CoreResult<String> {
        self.required(field, value, self.max_name_length)
    }

    #[track_caller]
    pub fn title(&self, field: &'static str, value: &str) -> CoreResult<String> {
        self.required(field, value, self.max_title_length)
    }

    #[track_caller]
    pub fn description(&self, value: &str) -> CoreResult<()> {
        Self::bounded("Description", value, self.max_description_length)
    }

    #[track_caller]
    fn bounded(field: &'static str, value: &str, max: usize) -> CoreResult<()> {
        let length = value.chars().count();
        if length > max {
            return Err(CoreError::validation(format!(
                "{field} must be at most {max} characters, got {length}"
            )));
        }
        Ok(())
    }
}
