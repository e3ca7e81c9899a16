pub mod argon2_hasher;
pub mod claims;
pub mod credential_hasher;
pub mod error;
pub mod jwt_token_issuer;
pub mod rate_limit_config;
pub mod request_rate_limiter;
pub mod token_issuer;

pub use argon2_hasher::Argon2Hasher;
pub use claims::Claims;
pub use credential_hasher::CredentialHasher;
pub use error::{AuthError, Result};
pub use jwt_token_issuer::{JwtTokenIssuer, MIN_SECRET_LEN};
pub use rate_limit_config::RateLimitConfig;
pub use request_rate_limiter::RequestRateLimiter;
pub use token_issuer::{IssuedToken, TokenIssuer};
