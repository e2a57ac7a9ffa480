use crate::{AuthError, Claims, Result as AuthErrorResult};

use habit_core::User;

use std::panic::Location;
use std::time::Duration;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Signs session tokens for authenticated users
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl JwtIssuer {
    pub fn with_hs256(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[track_caller]
    pub fn issue(&self, user: &User) -> AuthErrorResult<String> {
        self.issue_at(user, Utc::now())
    }

    /// Issue a token as if signed at `now`
    #[track_caller]
    pub fn issue_at(&self, user: &User, now: DateTime<Utc>) -> AuthErrorResult<String> {
        let iat = now.timestamp();
        let ttl_secs = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);

        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            fullname: user.fullname.clone(),
            exp: iat.saturating_add(ttl_secs),
            iat,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
