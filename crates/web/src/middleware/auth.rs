use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use storage::repository::CoachRepository;

use crate::error::WebError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Coach username
    pub sub: String,
    /// Expiry, seconds since the epoch
    pub exp: i64,
}

/// Issues and resolves signed, expiring bearer tokens carrying a coach
/// username as subject.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_minutes: i64,
}

impl TokenService {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_minutes,
        }
    }

    pub fn issue(&self, username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: username.to_string(),
            exp: (Utc::now() + Duration::minutes(self.ttl_minutes)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Fails on malformed, mis-signed, or expired tokens
    pub fn resolve(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &Validation::default()).map(|data| data.claims)
    }
}

/// Resolves the bearer token to a coach and stores it in request extensions.
/// Handlers behind this middleware read it with `Extension<Coach>`. Any
/// failure, including an unknown subject, surfaces as 401.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = bearer_token(req.headers()).ok_or(WebError::Unauthorized)?;

    let claims = state.tokens.resolve(token).map_err(|e| {
        tracing::debug!("Token rejected: {}", e);
        WebError::Unauthorized
    })?;

    let coach = CoachRepository::new(state.db.pool())
        .find_by_username(&claims.sub)
        .await
        .map_err(|_| WebError::Unauthorized)?;

    req.extensions_mut().insert(coach);
    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_token_round_trip() {
        let tokens = TokenService::new("test-secret", 60);
        let token = tokens.issue("coach_anna").unwrap();
        let claims = tokens.resolve(&token).unwrap();
        assert_eq!(claims.sub, "coach_anna");
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = TokenService::new("test-secret", -5);
        let token = tokens.issue("coach_anna").unwrap();
        assert!(tokens.resolve(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenService::new("secret-a", 60);
        let verifier = TokenService::new("secret-b", 60);
        let token = issuer.issue("coach_anna").unwrap();
        assert!(verifier.resolve(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let tokens = TokenService::new("test-secret", 60);
        assert!(tokens.resolve("not-a-jwt").is_err());
    }

    #[test]
    fn test_bearer_token_extraction() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_or_non_bearer_header() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        assert_eq!(bearer_token(&headers), None);
    }
}
