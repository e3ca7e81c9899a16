use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, HandlerConfig, LoggingConfig, MEMORY_DATABASE_PATH,
    RateLimitConfig, ServerConfig, ValidationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
    pub handler: HandlerConfig,
    pub validation: ValidationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for IDM_CONFIG_DIR env var, else use ./.idm/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply IDM_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Parse a TOML document. No file access, no env overrides.
    pub fn from_toml_str(contents: &str, origin: &Path) -> ConfigErrorResult<Self> {
        toml::from_str(contents).map_err(|e| ConfigError::Toml {
            path: origin.to_path_buf(),
            source: e,
        })
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml_str(&contents, path)
    }

    /// Get the config directory.
    /// Priority: IDM_CONFIG_DIR env var > ./.idm/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.rate_limit.validate()?;
        self.handler.validate()?;
        self.validation.validate()?;

        Ok(())
    }

    /// Absolute path to the database file, or `:memory:` unchanged.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        if self.database.is_memory() {
            return Ok(PathBuf::from(MEMORY_DATABASE_PATH));
        }

        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Absolute path to the log file, if file logging is enabled.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };

        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(file)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (shutdown grace {}s)",
            self.server.host, self.server.port, self.server.shutdown_timeout_secs
        );
        info!(
            "  database: {} (max {} connections, busy timeout {}s)",
            self.database.path, self.database.max_connections, self.database.busy_timeout_secs
        );

        info!(
            "  auth: HS256 ({} key), issuer={}, ttl={}s",
            if self.auth.jwt_secret.is_some() {
                "configured"
            } else {
                "ephemeral"
            },
            self.auth.issuer,
            self.auth.token_ttl_secs
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("none")
        );

        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );

        info!("  handler: timeout={}s", self.handler.timeout_secs);

        info!(
            "  validation: username={}-{}, password>={}, email<={}, display_name<={}, avatar<={}",
            self.validation.username_min_length,
            self.validation.username_max_length,
            self.validation.password_min_length,
            self.validation.email_max_length,
            self.validation.display_name_max_length,
            self.validation.avatar_max_length
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("IDM_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("IDM_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "IDM_SERVER_SHUTDOWN_TIMEOUT_SECS",
            &mut self.server.shutdown_timeout_secs,
        );

        // Database
        Self::apply_env_string("IDM_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "IDM_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "IDM_DATABASE_BUSY_TIMEOUT_SECS",
            &mut self.database.busy_timeout_secs,
        );

        // Auth
        Self::apply_env_option_string("IDM_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("IDM_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);
        Self::apply_env_string("IDM_AUTH_ISSUER", &mut self.auth.issuer);

        // Logging
        Self::apply_env_parse("IDM_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("IDM_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("IDM_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("IDM_LOG_FILE", &mut self.logging.file);

        // Rate limit
        Self::apply_env_parse(
            "IDM_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "IDM_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );

        // Handler
        Self::apply_env_parse("IDM_HANDLER_TIMEOUT_SECS", &mut self.handler.timeout_secs);

        // Validation
        Self::apply_env_parse(
            "IDM_VALIDATION_USERNAME_MIN_LENGTH",
            &mut self.validation.username_min_length,
        );
        Self::apply_env_parse(
            "IDM_VALIDATION_USERNAME_MAX_LENGTH",
            &mut self.validation.username_max_length,
        );
        Self::apply_env_parse(
            "IDM_VALIDATION_PASSWORD_MIN_LENGTH",
            &mut self.validation.password_min_length,
        );
        Self::apply_env_parse(
            "IDM_VALIDATION_EMAIL_MAX_LENGTH",
            &mut self.validation.email_max_length,
        );
        Self::apply_env_parse(
            "IDM_VALIDATION_DISPLAY_NAME_MAX_LENGTH",
            &mut self.validation.display_name_max_length,
        );
        Self::apply_env_parse(
            "IDM_VALIDATION_AVATAR_MAX_LENGTH",
            &mut self.validation.avatar_max_length,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values are ignored.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values.
    /// An empty value clears the option.
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = if val.is_empty() { None } else { Some(val) };
        }
    }
}
