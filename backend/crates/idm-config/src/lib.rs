mod auth_config;
mod config;
mod database_config;
mod error;
mod handler_config;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;
mod validation_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use handler_config::HandlerConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use validation_config::ValidationConfig;

pub const CONFIG_DIR_ENV: &str = "IDM_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".idm";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Server
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8081;
pub const MIN_PORT: u16 = 1024;
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;
pub const MIN_SHUTDOWN_TIMEOUT_SECS: u64 = 1;
pub const MAX_SHUTDOWN_TIMEOUT_SECS: u64 = 300;

// Database
pub const DEFAULT_DATABASE_FILENAME: &str = "accounts.db";
pub const MEMORY_DATABASE_PATH: &str = ":memory:";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const MIN_DB_MAX_CONNECTIONS: u32 = 1;
pub const MAX_DB_MAX_CONNECTIONS: u32 = 100;
pub const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;
pub const MAX_BUSY_TIMEOUT_SECS: u64 = 60;

// Auth
pub const MIN_JWT_SECRET_LENGTH: usize = 32;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 86_400;
pub const MIN_TOKEN_TTL_SECS: u64 = 60;
pub const MAX_TOKEN_TTL_SECS: u64 = 30 * 86_400;
pub const DEFAULT_ISSUER: &str = "idm";

// Logging
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
