use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when issuing or checking bearer tokens
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
}

/// JWT claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Person id
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// HS256 token issuer and verifier
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Sign a token for the given person
    pub fn issue(&self, person_id: &str) -> Result<String, AuthError> {
        let now = chrono::Utc::now().timestamp().max(0) as usize;
        let ttl = usize::try_from(self.ttl_secs).unwrap_or(usize::MAX);
        let claims = Claims {
            sub: person_id.to_string(),
            iat: now,
            // An oversized TTL pins expiry at the far end instead of wrapping
            exp: now.saturating_add(ttl),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Check signature and expiry, returning the person id
    pub fn verify(&self, token: &str) -> Result<String, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims.sub)
    }

    /// Extract the token from an `Authorization: Bearer ...` header value
    pub fn bearer(header: Option<&str>) -> Result<&str, AuthError> {
        header
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)
    }
}
