use sqlx::PgPool;

use crate::dto::child::CreateChildRequest;
use crate::error::{Result, StorageError};
use crate::models::Child;

/// Repository for Child database operations. Children have no coach column;
/// ownership checks join through their group.
pub struct ChildRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ChildRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add a child to a group. The caller must have already verified group
    /// ownership via `GroupRepository::find_owned`.
    pub async fn create(&self, group_id: i32, req: &CreateChildRequest) -> Result<Child> {
        let child = sqlx::query_as::<_, Child>(
            r#"
            INSERT INTO children (name, surname, birthday, group_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, surname, birthday, group_id
            "#,
        )
        .bind(&req.name)
        .bind(&req.surname)
        .bind(req.birthday)
        .bind(group_id)
        .fetch_one(self.pool)
        .await?;

        Ok(child)
    }

    /// List a group's children ordered by (surname, name)
    pub async fn list_by_group(&self, group_id: i32) -> Result<Vec<Child>> {
        let children = sqlx::query_as::<_, Child>(
            r#"
            SELECT id, name, surname, birthday, group_id
            FROM children
            WHERE group_id = $1
            ORDER BY surname, name
            "#,
        )
        .bind(group_id)
        .fetch_all(self.pool)
        .await?;

        Ok(children)
    }

    /// Get a child only if its group belongs to the given coach
    pub async fn find_owned(&self, child_id: i32, coach_id: i32) -> Result<Child> {
        let child = sqlx::query_as::<_, Child>(
            r#"
            SELECT c.id, c.name, c.surname, c.birthday, c.group_id
            FROM children c
            JOIN groups g ON g.id = c.group_id
            WHERE c.id = $1 AND g.coach_id = $2
            "#,
        )
        .bind(child_id)
        .bind(coach_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(child)
    }

    /// Delete a child if its group belongs to the given coach; the child's
    /// results cascade
    pub async fn delete(&self, child_id: i32, coach_id: i32) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM children c
            USING groups g
            WHERE g.id = c.group_id AND c.id = $1 AND g.coach_id = $2
            "#,
        )
        .bind(child_id)
        .bind(coach_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
