use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header, web, FromRequest, HttpRequest};
use anyhow::Context;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, models::users::ROLE_ADMIN};

const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: u64,
    pub username: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// HMAC keys for signing and checking bearer tokens, shared through app data.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub fn issue(&self, id: u64, username: &str, role: &str) -> anyhow::Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: id,
            username: username.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).context("token signing")
    }

    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ApiError::unauthorized("invalid or expired token"))
    }
}

/// Identity decoded from the `Authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: u64,
    pub username: String,
    pub role: String,
}

fn user_from_request(req: &HttpRequest) -> Result<AuthUser, ApiError> {
    let keys = req
        .app_data::<web::Data<TokenKeys>>()
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("token keys not configured")))?;
    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::unauthorized("missing authorization header"))?
        .to_str()
        .map_err(|_| ApiError::unauthorized("malformed authorization header"))?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("expected a bearer token"))?;
    let claims = keys.verify(token)?;
    Ok(AuthUser {
        id: claims.sub,
        username: claims.username,
        role: claims.role,
    })
}

impl FromRequest for AuthUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;
    type Config = ();

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(user_from_request(req))
    }
}

/// Like `AuthUser` but additionally requires the admin role.
pub struct AdminUser(pub AuthUser);

impl FromRequest for AdminUser {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;
    type Config = ();

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(user_from_request(req).and_then(|user| {
            if user.role == ROLE_ADMIN {
                Ok(AdminUser(user))
            } else {
                Err(ApiError::forbidden("administrator role required"))
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn token_round_trip_preserves_identity() {
        let keys = TokenKeys::from_secret(b"test-secret");
        let token = keys.issue(7, "drhouse", "doctor").unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.username, "drhouse");
        assert_eq!(claims.role, "doctor");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let keys = TokenKeys::from_secret(b"test-secret");
        let other = TokenKeys::from_secret(b"other-secret");
        let token = other.issue(7, "drhouse", "doctor").unwrap();
        let err = keys.verify(&token).unwrap_err();
        assert_eq!(err.status_code(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = TokenKeys::from_secret(b"test-secret");
        let now = Utc::now();
        let claims = Claims {
            sub: 7,
            username: "drhouse".to_string(),
            role: "doctor".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        let keys = TokenKeys::from_secret(b"test-secret");
        assert!(keys.verify("not-a-token").is_err());
    }
}
