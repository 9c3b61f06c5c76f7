//! Bearer Token Authentication
//!
//! Access tokens are HS256 JWTs carrying `sub` (username) and `exp` (unix
//! seconds) claims, signed with the `TOKEN_SECRET` secret. They are issued by
//! `POST /token` against the admin account and checked by [`auth_middleware`]
//! on protected routes.

use argon2::{Argon2, PasswordHash, PasswordVerifier};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use jwt::{SignWithKey, VerifyWithKey};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

use crate::routes::ApiError;
use crate::AppState;

type HmacSha256 = Hmac<Sha256>;

pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

/// One week
pub const MAX_TOKEN_TTL_MINUTES: i64 = 10_080;

/// Detail returned for every rejected bearer token
pub const INVALID_CREDENTIALS: &str = "Could not validate credentials";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Token secret must not be empty")]
    EmptySecret,

    #[error("Token lifetime must be between 1 and {max} minutes, got {0}", max = MAX_TOKEN_TTL_MINUTES)]
    InvalidTtl(i64),

    #[error("Invalid admin password hash: {0}")]
    InvalidPasswordHash(String),

    #[error("Token expiry is out of range")]
    ExpiryOutOfRange,

    #[error("Failed to sign token: {0}")]
    Signing(String),

    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    BadSignature,

    #[error("Token expired")]
    Expired,
}

/// Authenticated caller, available to handlers as a request extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// JWT claims as they appear on the wire
#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    sub: String,
    exp: i64,
}

/// Issues and verifies signed bearer tokens
#[derive(Clone)]
pub struct TokenSigner {
    key: HmacSha256,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &str, ttl_minutes: i64) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::EmptySecret);
        }
        if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&ttl_minutes) {
            return Err(AuthError::InvalidTtl(ttl_minutes));
        }
        let ttl = Duration::try_minutes(ttl_minutes).ok_or(AuthError::InvalidTtl(ttl_minutes))?;
        let key =
            HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| AuthError::EmptySecret)?;
        Ok(Self { key, ttl })
    }

    pub fn issue(&self, username: &str) -> Result<String, AuthError> {
        self.issue_at(username, Utc::now())
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.verify_at(token, Utc::now())
    }

    fn issue_at(&self, username: &str, now: DateTime<Utc>) -> Result<String, AuthError> {
        let expires_at = now
            .checked_add_signed(self.ttl)
            .ok_or(AuthError::ExpiryOutOfRange)?;
        let claims = TokenClaims {
            sub: username.to_string(),
            exp: expires_at.timestamp(),
        };
        claims
            .sign_with_key(&self.key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let claims: TokenClaims = token.verify_with_key(&self.key).map_err(|e| match e {
            jwt::Error::InvalidSignature | jwt::Error::AlgorithmMismatch(..) => {
                AuthError::BadSignature
            }
            _ => AuthError::Malformed,
        })?;
        if claims.sub.is_empty() {
            return Err(AuthError::Malformed);
        }

        let expires_at = DateTime::from_timestamp(claims.exp, 0).ok_or(AuthError::Malformed)?;
        if expires_at <= now {
            return Err(AuthError::Expired);
        }

        Ok(Claims {
            username: claims.sub,
            expires_at,
        })
    }
}

/// The single account allowed to request tokens
pub struct AdminAccount {
    username: String,
    password_hash: String,
}

impl AdminAccount {
    /// `password_hash` must be an argon2 PHC string
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let password_hash = password_hash.into();
        PasswordHash::new(&password_hash)
            .map_err(|e| AuthError::InvalidPasswordHash(e.to_string()))?;

        Ok(Self {
            username: username.into(),
            password_hash,
        })
    }

    fn verify(&self, username: &str, password: &str) -> bool {
        if username != self.username {
            return false;
        }
        match PasswordHash::new(&self.password_hash) {
            Ok(hash) => Argon2::default()
                .verify_password(password.as_bytes(), &hash)
                .is_ok(),
            Err(_) => false,
        }
    }
}

/// Credential check plus token signing
pub struct Authenticator {
    signer: TokenSigner,
    admin: Option<AdminAccount>,
}

impl Authenticator {
    /// Without an admin account every login is refused
    pub fn new(signer: TokenSigner, admin: Option<AdminAccount>) -> Self {
        Self { signer, admin }
    }

    /// Issue a token when the credentials match the admin account
    pub fn login(&self, username: &str, password: &str) -> Result<Option<String>, AuthError> {
        match &self.admin {
            Some(admin) if admin.verify(username, password) => {
                self.signer.issue(username).map(Some)
            }
            _ => Ok(None),
        }
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        self.signer.verify(token)
    }
}

/// Authentication middleware
/// Validates the bearer token and attaches its [`Claims`]
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|h| h.strip_prefix("Bearer ").map(str::to_string));

    let token = match token {
        Some(Some(token)) => token,
        Some(None) => {
            tracing::warn!("Invalid Authorization header format");
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }
        None => {
            tracing::warn!("Missing Authorization header");
            return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }
    };

    let claims = state.auth.verify(&token).map_err(|e| {
        tracing::warn!(error = %e, "Rejected bearer token");
        ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
    })?;

    tracing::debug!(
        username = %claims.username,
        expires_at = %claims.expires_at,
        "Authenticated request"
    );
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
