use sqlx::PgPool;

use crate::dto::coach::RegisterCoachRequest;
use crate::error::{Result, StorageError};
use crate::models::Coach;

/// Repository for Coach database operations
pub struct CoachRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CoachRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new coach account with an already-hashed credential
    pub async fn create(&self, req: &RegisterCoachRequest, password_hash: &str) -> Result<Coach> {
        let coach = sqlx::query_as::<_, Coach>(
            r#"
            INSERT INTO coaches (username, name, surname, birthday, level, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, name, surname, birthday, level, password_hash
            "#,
        )
        .bind(&req.username)
        .bind(&req.name)
        .bind(&req.surname)
        .bind(req.birthday)
        .bind(&req.level)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation("Username already exists".to_string());
                }
            }
            StorageError::from(e)
        })?;

        Ok(coach)
    }

    /// Look up a coach by username (token subjects are usernames)
    pub async fn find_by_username(&self, username: &str) -> Result<Coach> {
        let coach = sqlx::query_as::<_, Coach>(
            r#"
            SELECT id, username, name, surname, birthday, level, password_hash
            FROM coaches
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(coach)
    }
}
