use crate::{AuthError, Claims, IssuedToken, Result as AuthErrorResult, TokenIssuer};

use idm_core::Account;

use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Minimum accepted HS256 secret length in bytes
pub const MIN_SECRET_LEN: usize = 32;

/// HS256 JWT issuer. Also verifies what it issued.
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    ttl: Duration,
}

impl JwtTokenIssuer {
    #[track_caller]
    pub fn with_hs256(secret: &[u8], issuer: &str, ttl: Duration) -> AuthErrorResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(AuthError::InvalidSecret {
                message: format!(
                    "secret must be at least {MIN_SECRET_LEN} bytes, got {}",
                    secret.len()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance
        validation.set_issuer(&[issuer]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer: issuer.to_string(),
            ttl,
        })
    }

    /// Issuer keyed by a random per-process secret. Tokens do not survive a restart.
    #[track_caller]
    pub fn ephemeral(issuer: &str, ttl: Duration) -> AuthErrorResult<Self> {
        let secret: [u8; 32] = rand::random();
        log::warn!("No JWT secret configured, using an ephemeral signing key");
        Self::with_hs256(&secret, issuer, ttl)
    }

    /// Verify a token and return its claims
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}

impl TokenIssuer for JwtTokenIssuer {
    #[track_caller]
    fn issue(&self, account: &Account) -> AuthErrorResult<IssuedToken> {
        let now = Utc::now();
        let ttl_secs = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX / 2);
        let exp = now.timestamp().saturating_add(ttl_secs);

        let claims = Claims {
            sub: account.id.to_string(),
            username: account.username.clone(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(
            |e| AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            },
        )?;

        let expires_at = DateTime::<Utc>::from_timestamp(exp, 0).unwrap_or(now);

        Ok(IssuedToken { token, expires_at })
    }
}
