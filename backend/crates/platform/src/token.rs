//! Signed Timed Tokens
//!
//! Thin wrapper around HS256 JWTs. A [`TokenCodec`] owns one signing secret
//! and one TTL; each token class (access, refresh, confirmation) gets its own
//! codec so secrets and lifetimes never mix.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Clock skew tolerated when validating `exp` (seconds)
const VALIDATION_LEEWAY_SECS: u64 = 30;

/// Token decode/encode failures
///
/// Deliberately coarse: callers only ever need to distinguish "ran out of
/// time" from "not a token we issued".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature valid but the token is past its expiry
    #[error("Token has expired")]
    Expired,

    /// Malformed, tampered with, or signed with a different secret
    #[error("Token is invalid")]
    Invalid,
}

/// Claims carried by every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user id as string)
    pub sub: String,
    /// Expiry (unix seconds)
    pub exp: i64,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Unique token id
    pub jti: String,
}

/// A freshly issued token together with its expiry
#[derive(Debug, Clone)]
pub struct SignedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Encoder/decoder for one token class
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec for the given secret and TTL (seconds).
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = VALIDATION_LEEWAY_SECS;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl: Duration::seconds(ttl_secs),
        }
    }

    /// Issue a token for the given subject.
    pub fn issue(&self, subject: &Uuid) -> Result<SignedToken, TokenError> {
        let now = Utc::now();
        let expires_at = now + self.ttl;

        let claims = TokenClaims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|_| TokenError::Invalid)?;

        Ok(SignedToken { token, expires_at })
    }

    /// Decode and validate a token, returning its claims.
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    /// Configured TTL in seconds.
    pub fn ttl_secs(&self) -> i64 {
        self.ttl.num_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-signing-secret";

    #[test]
    fn test_issue_and_decode() {
        let codec = TokenCodec::new(SECRET, 900);
        let subject = Uuid::new_v4();

        let signed = codec.issue(&subject).unwrap();
        let claims = codec.decode(&signed.token).unwrap();

        assert_eq!(claims.sub, subject.to_string());
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp, signed.expires_at.timestamp());
    }

    #[test]
    fn test_unique_token_ids() {
        let codec = TokenCodec::new(SECRET, 900);
        let subject = Uuid::new_v4();

        let first = codec.decode(&codec.issue(&subject).unwrap().token).unwrap();
        let second = codec.decode(&codec.issue(&subject).unwrap().token).unwrap();

        assert_ne!(first.jti, second.jti);
    }

    #[test]
    fn test_expired_token() {
        // Issued already past expiry, beyond the validation leeway
        let codec = TokenCodec::new(SECRET, -120);
        let signed = codec.issue(&Uuid::new_v4()).unwrap();

        assert_eq!(codec.decode(&signed.token), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret() {
        let codec = TokenCodec::new(SECRET, 900);
        let other = TokenCodec::new(b"a-different-secret", 900);

        let signed = codec.issue(&Uuid::new_v4()).unwrap();

        assert_eq!(other.decode(&signed.token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_garbage_token() {
        let codec = TokenCodec::new(SECRET, 900);

        assert_eq!(codec.decode("not-a-token"), Err(TokenError::Invalid));
        assert_eq!(codec.decode(""), Err(TokenError::Invalid));
        assert_eq!(codec.decode("a.b.c"), Err(TokenError::Invalid));
    }

    #[test]
    fn test_ttl_secs() {
        let codec = TokenCodec::new(SECRET, 3600);
        assert_eq!(codec.ttl_secs(), 3600);
    }
}
