use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::Group;

/// Repository for Group database operations. Everything except `find_by_id`
/// takes the calling coach's id and scopes the query to it.
pub struct GroupRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GroupRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a group for a coach. Duplicate names per coach violate the
    /// (name, coach_id) unique constraint.
    pub async fn create(&self, coach_id: i32, name: &str) -> Result<Group> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            INSERT INTO groups (name, coach_id)
            VALUES ($1, $2)
            RETURNING id, name, coach_id
            "#,
        )
        .bind(name)
        .bind(coach_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.code().as_deref() == Some("23505") {
                    return StorageError::ConstraintViolation(
                        "Group name already exists for this coach".to_string(),
                    );
                }
            }
            StorageError::from(e)
        })?;

        Ok(group)
    }

    /// List a coach's groups, ordered by name
    pub async fn list_by_coach(&self, coach_id: i32) -> Result<Vec<Group>> {
        let groups = sqlx::query_as::<_, Group>(
            r#"
            SELECT id, name, coach_id
            FROM groups
            WHERE coach_id = $1
            ORDER BY name
            "#,
        )
        .bind(coach_id)
        .fetch_all(self.pool)
        .await?;

        Ok(groups)
    }

    /// Get a group only if it belongs to the given coach. Absence and
    /// foreign ownership are both reported as NotFound.
    pub async fn find_owned(&self, group_id: i32, coach_id: i32) -> Result<Group> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            SELECT id, name, coach_id
            FROM groups
            WHERE id = $1 AND coach_id = $2
            "#,
        )
        .bind(group_id)
        .bind(coach_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(group)
    }

    /// Unscoped lookup, for reads reached through an already-owned
    /// competition (e.g. the document export path).
    pub async fn find_by_id(&self, group_id: i32) -> Result<Group> {
        let group = sqlx::query_as::<_, Group>(
            r#"
            SELECT id, name, coach_id
            FROM groups
            WHERE id = $1
            "#,
        )
        .bind(group_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(group)
    }

    /// Delete an owned group; children and their results cascade
    pub async fn delete(&self, group_id: i32, coach_id: i32) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM groups
            WHERE id = $1 AND coach_id = $2
            "#,
        )
        .bind(group_id)
        .bind(coach_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
