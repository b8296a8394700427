use sqlx::PgPool;
use storage::dto::coach::RegisterCoachRequest;
use storage::error::StorageError;
use storage::models::Coach;
use storage::repository::CoachRepository;
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::middleware::auth::TokenService;

/// Hash a password with argon2 and a random per-credential salt
pub fn hash_password(password: &str) -> Result<String, argon2::Error> {
    let salt = Uuid::new_v4();
    argon2::hash_encoded(
        password.as_bytes(),
        salt.as_bytes(),
        &argon2::Config::default(),
    )
}

/// Verify a password against its encoded hash; malformed hashes count as a
/// mismatch rather than an error.
pub fn verify_password(password: &str, encoded: &str) -> bool {
    argon2::verify_encoded(encoded, password.as_bytes()).unwrap_or(false)
}

/// Register a new coach account
pub async fn register(pool: &PgPool, req: &RegisterCoachRequest) -> WebResult<Coach> {
    let password_hash = hash_password(&req.password)
        .map_err(|e| WebError::InternalServerError(format!("Password hashing failed: {e}")))?;

    let repo = CoachRepository::new(pool);
    Ok(repo.create(req, &password_hash).await?)
}

/// Verify credentials and issue a bearer token. An unknown username and a
/// wrong password are indistinguishable to the caller.
pub async fn login(
    pool: &PgPool,
    tokens: &TokenService,
    username: &str,
    password: &str,
) -> WebResult<String> {
    let repo = CoachRepository::new(pool);

    let coach = match repo.find_by_username(username).await {
        Ok(coach) => coach,
        Err(StorageError::NotFound) => return Err(WebError::Unauthorized),
        Err(e) => return Err(e.into()),
    };

    if !verify_password(password, &coach.password_hash) {
        return Err(WebError::Unauthorized);
    }

    tokens
        .issue(&coach.username)
        .map_err(|e| WebError::InternalServerError(format!("Token signing failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &hash));
        assert!(!verify_password("wrong password", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same password").unwrap();
        let second = hash_password("same password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_mismatch() {
        assert!(!verify_password("anything", "not-an-encoded-hash"));
    }
}
