//! Session token issuance and verification.

use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::UserId;

/// Session token lifetime. Tokens are never revoked server-side; they
/// simply expire.
const TOKEN_TTL_DAYS: i64 = 7;

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,   // Subject (user id as string)
    pub user_id: Uuid, // User UUID
    pub exp: i64,      // Expiration timestamp
    pub iat: i64,      // Issued at timestamp
    pub iss: String,   // Issuer
    pub jti: String,   // Unique token identifier
}

impl Claims {
    /// The subject as a typed id.
    pub fn subject(&self) -> UserId {
        UserId::from_uuid(self.user_id)
    }
}

/// Issues and verifies signed session tokens (HS256).
///
/// Constructed once at startup from the process-wide signing secret; the
/// secret is never read ambiently from the environment here.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl TokenService {
    pub fn new(secret: &str, issuer: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
        }
    }

    /// Mint a token for `subject`, expiring in 7 days.
    pub fn issue(&self, subject: UserId) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::days(TOKEN_TTL_DAYS);

        let claims = Claims {
            sub: subject.to_string(),
            user_id: subject.into_uuid(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify signature, shape, and expiry.
    ///
    /// Any failure is an `Err`, never a panic; the identity middleware
    /// treats all of them as "anonymous".
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}
