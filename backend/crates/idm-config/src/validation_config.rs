use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Defaults applied to account input at the request boundary
pub const DEFAULT_USERNAME_MIN_LENGTH: usize = 3;
pub const DEFAULT_USERNAME_MAX_LENGTH: usize = 50;
pub const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;
pub const DEFAULT_EMAIL_MAX_LENGTH: usize = 100;
pub const DEFAULT_DISPLAY_NAME_MAX_LENGTH: usize = 50;
pub const DEFAULT_AVATAR_MAX_LENGTH: usize = 255;

/// Upper bound for any configurable field limit
pub const MAX_FIELD_LENGTH: usize = 4096;

/// Validation configuration for account field limits.
///
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub username_min_length: usize,
    pub username_max_length: usize,
    pub password_min_length: usize,
    pub email_max_length: usize,
    pub display_name_max_length: usize,
    pub avatar_max_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            username_min_length: DEFAULT_USERNAME_MIN_LENGTH,
            username_max_length: DEFAULT_USERNAME_MAX_LENGTH,
            password_min_length: DEFAULT_PASSWORD_MIN_LENGTH,
            email_max_length: DEFAULT_EMAIL_MAX_LENGTH,
            display_name_max_length: DEFAULT_DISPLAY_NAME_MAX_LENGTH,
            avatar_max_length: DEFAULT_AVATAR_MAX_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.username_min_length < 1 {
            return Err(ConfigError::validation(
                "validation.username_min_length must be at least 1",
            ));
        }

        if self.username_min_length > self.username_max_length {
            return Err(ConfigError::validation(format!(
                "validation.username_min_length ({}) exceeds username_max_length ({})",
                self.username_min_length, self.username_max_length
            )));
        }

        if self.password_min_length < 1 {
            return Err(ConfigError::validation(
                "validation.password_min_length must be at least 1",
            ));
        }

        for (name, value) in [
            ("username_max_length", self.username_max_length),
            ("email_max_length", self.email_max_length),
            ("display_name_max_length", self.display_name_max_length),
            ("avatar_max_length", self.avatar_max_length),
        ] {
            if value == 0 || value > MAX_FIELD_LENGTH {
                return Err(ConfigError::validation(format!(
                    "validation.{} must be 1-{}, got {}",
                    name, MAX_FIELD_LENGTH, value
                )));
            }
        }

        Ok(())
    }
}
