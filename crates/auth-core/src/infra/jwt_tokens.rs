//! JWT implementation of the token port.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain::{AccessToken, TokenError, TokenService, UserId};

/// Signed claim set: subject, issue time, expiry. Nothing else goes into the
/// token; account state is resolved at validation time from the repository.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: Uuid,
    iat: i64,
    exp: i64,
}

/// HMAC-signed JWT token service.
///
/// The signing secret is passed explicitly at construction; there is no
/// ambient or process-global key material.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtTokenService {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::default();
        // Exact expiry boundaries; the default 60s leeway would keep expired
        // tokens validating.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, subject: UserId, ttl: Duration) -> Result<AccessToken, TokenError> {
        let now = Utc::now();
        let expires_at = now + ttl;

        let claims = Claims {
            sub: subject.as_uuid(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(format!("failed to sign token: {e}")))?;

        Ok(AccessToken::new(token))
    }

    fn validate(&self, token: &str) -> Result<UserId, TokenError> {
        let data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid,
                }
            })?;

        // The library's expiry comparison is strict-less-than, which would
        // accept a token at exactly its expiry instant. A token is valid
        // only while now < expires_at.
        if Utc::now().timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(UserId::from_uuid(data.claims.sub))
    }
}
