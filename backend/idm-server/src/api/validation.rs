use crate::{LoginRequest, RegisterRequest, UpdateAccountRequest};

use idm_config::ValidationConfig;
use idm_core::{AppError, Result};

/// Field checks applied to request bodies before the workflow runs.
///
/// Lengths are counted in characters. Every failure is `InvalidParams`.
pub struct AccountValidator;

impl AccountValidator {
    #[track_caller]
    pub fn validate_register(req: &RegisterRequest, limits: &ValidationConfig) -> Result<()> {
        Self::validate_length(
            &req.username,
            "username",
            limits.username_min_length,
            limits.username_max_length,
        )?;
        Self::validate_email(&req.email, limits.email_max_length)?;
        Self::validate_length(
            &req.password,
            "password",
            limits.password_min_length,
            usize::MAX,
        )?;

        if let Some(display_name) = &req.display_name {
            Self::validate_length(
                display_name,
                "display_name",
                0,
                limits.display_name_max_length,
            )?;
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_login(req: &LoginRequest) -> Result<()> {
        if req.username.is_empty() {
            return Err(AppError::invalid_params("username is required"));
        }

        if req.password.is_empty() {
            return Err(AppError::invalid_params("password is required"));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_update(req: &UpdateAccountRequest, limits: &ValidationConfig) -> Result<()> {
        if let Some(display_name) = &req.display_name {
            Self::validate_length(
                display_name,
                "display_name",
                0,
                limits.display_name_max_length,
            )?;
        }

        if let Some(avatar) = &req.avatar_reference {
            Self::validate_length(avatar, "avatar_reference", 0, limits.avatar_max_length)?;
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_length(value: &str, field: &str, min: usize, max: usize) -> Result<()> {
        let len = value.chars().count();

        if len < min {
            return Err(AppError::invalid_params(format!(
                "{field} must be at least {min} characters"
            )));
        }

        if len > max {
            return Err(AppError::invalid_params(format!(
                "{field} must not exceed {max} characters"
            )));
        }

        Ok(())
    }

    #[track_caller]
    pub fn validate_email(email: &str, max_length: usize) -> Result<()> {
        if email.is_empty() {
            return Err(AppError::invalid_params("email is required"));
        }

        if email.chars().count() > max_length {
            return Err(AppError::invalid_params(format!(
                "email must not exceed {max_length} characters"
            )));
        }

        if !is_well_formed_email(email) {
            return Err(AppError::invalid_params(format!(
                "'{email}' is not a valid email address"
            )));
        }

        Ok(())
    }
}

/// `local@domain.tld` shape: one `@`, no whitespace, and a domain made of
/// non-empty dot-separated labels with at least one dot.
pub fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-')
    })
}
