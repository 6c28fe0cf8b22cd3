/**
 * Session Tokens
 *
 * This module issues and validates the signed JSON Web Tokens that identify
 * a user on every protected request. Tokens are stateless: the server only
 * keeps the signing secret, held inside a `TokenService` built once from
 * configuration.
 *
 * # Wire Format
 *
 * `base64url(header).base64url(payload).base64url(signature)`, signed with
 * HMAC-SHA256. The payload carries `user_id`, `iss`, `iat` and `exp`.
 *
 * # Validation Outcomes
 *
 * - `Malformed` - not three segments, bad base64url, or undecodable claims
 * - `WrongAlgorithm` - header declares something outside the HMAC family
 * - `BadSignature` - signature does not match the secret
 * - `Expired` - current time is at or past `exp`
 */

use std::collections::HashSet;
use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Months, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::AppConfig;

/// Tokens stay valid for one calendar year after issuance
pub const TOKEN_VALIDITY_MONTHS: u32 = 12;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// ID of the user the token was issued to
    pub user_id: String,
    /// Issuer
    pub iss: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Why a token could not be issued or accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("unexpected signing method {0}")]
    WrongAlgorithm(String),

    #[error("signature is invalid")]
    BadSignature,

    #[error("token is expired")]
    Expired,

    /// Issuance failed; the caller decides how to report it
    #[error("failed to sign token: {0}")]
    Signing(String),
}

/// Issues and validates tokens for one secret and issuer
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service from a raw secret
    pub fn new(secret: &[u8], issuer: impl Into<String>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // Expiry is checked against an explicit clock in validate_token_at
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer: issuer.into(),
        }
    }

    /// Create a token service from the application configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.jwt_secret.as_bytes(), config.jwt_issuer.clone())
    }

    /// Issuer written into every token
    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Create a token for a user, issued now
    ///
    /// # Arguments
    /// * `user_id` - ID of the user; not checked here
    ///
    /// # Returns
    /// The encoded token, or `TokenError::Signing`
    pub fn generate_token(&self, user_id: &str) -> Result<String, TokenError> {
        self.generate_token_at(user_id, Utc::now())
    }

    /// Create a token for a user as if issued at `issued_at`
    pub fn generate_token_at(
        &self,
        user_id: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let expires_at = issued_at
            .checked_add_months(Months::new(TOKEN_VALIDITY_MONTHS))
            .ok_or_else(|| TokenError::Signing("expiry is out of range".to_string()))?;

        let claims = Claims {
            user_id: user_id.to_string(),
            iss: self.issuer.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify and decode a token against the current time
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_token_at(token, Utc::now())
    }

    /// Verify and decode a token against the clock value `now`
    pub fn validate_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        if token.split('.').count() != 3 {
            return Err(TokenError::Malformed);
        }

        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| classify(token, &e))?;
        let claims = token_data.claims;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

fn classify(token: &str, err: &jsonwebtoken::errors::Error) -> TokenError {
    // The JWT library refuses to parse algorithms it has no enum variant for
    // (e.g. "none"), so read the header ourselves before trusting the error kind.
    if let Some(alg) = declared_algorithm(token) {
        if !is_hmac(&alg) {
            return TokenError::WrongAlgorithm(alg);
        }
    }

    match err.kind() {
        ErrorKind::InvalidSignature => TokenError::BadSignature,
        ErrorKind::InvalidAlgorithm => {
            TokenError::WrongAlgorithm(declared_algorithm(token).unwrap_or_default())
        }
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    }
}

/// The `alg` field of the token header, if the header segment decodes at all
fn declared_algorithm(token: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct RawHeader {
        alg: String,
    }

    let segment = token.split('.').next()?;
    let bytes = URL_SAFE_NO_PAD.decode(segment.trim_end_matches('=')).ok()?;
    serde_json::from_slice::<RawHeader>(&bytes)
        .ok()
        .map(|header| header.alg)
}

fn is_hmac(alg: &str) -> bool {
    matches!(alg, "HS256" | "HS384" | "HS512")
}
