//! Access and refresh token primitives.
//!
//! Access tokens are short-lived HS256 JWTs carrying [`Claims`]. Refresh
//! tokens are opaque random strings handed to the client once; the database
//! keeps only their SHA-256 digest, so a leaked sessions table cannot be
//! replayed.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use scribe_core::types::DbId;

/// Payload of every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User id the token was issued to.
    pub sub: DbId,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    /// Issue time, seconds since the Unix epoch.
    pub iat: i64,
    /// Per-token UUID, usable for audit trails.
    pub jti: String,
}

/// Token signing and lifetime settings.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 signing secret.
    pub secret: String,
    /// Access token lifetime in minutes.
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in days.
    pub refresh_token_expiry_days: i64,
}

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

impl JwtConfig {
    /// Read token settings from the environment.
    ///
    /// `JWT_SECRET` is required and must be non-empty; the service refuses
    /// to start without it. `JWT_ACCESS_EXPIRY_MINS` (default 15) and
    /// `JWT_REFRESH_EXPIRY_DAYS` (default 7) are optional.
    ///
    /// # Panics
    ///
    /// Panics when `JWT_SECRET` is missing or empty, or when an expiry
    /// override does not parse.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        let refresh_token_expiry_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
            refresh_token_expiry_days,
        }
    }

    /// Sign a fresh access token for `user_id`.
    pub fn issue_access_token(
        &self,
        user_id: DbId,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            exp: now + self.access_token_expiry_mins * 60,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        };
        encode(
            &Header::default(), // HS256
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Verify signature and expiry, returning the claims on success.
    pub fn decode_access_token(
        &self,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }
}

/// A freshly minted refresh token: the plaintext goes to the client, the
/// digest goes to the `user_sessions` table.
pub struct RefreshToken {
    pub plaintext: String,
    pub digest: String,
}

impl RefreshToken {
    pub fn generate() -> Self {
        let plaintext = Uuid::new_v4().to_string();
        let digest = refresh_token_digest(&plaintext);
        Self { plaintext, digest }
    }
}

/// SHA-256 hex digest of a refresh token, the only form ever persisted.
pub fn refresh_token_digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
