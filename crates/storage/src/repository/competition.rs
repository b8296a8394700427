use sqlx::PgPool;

use crate::dto::competition::CreateCompetitionRequest;
use crate::error::{Result, StorageError};
use crate::models::Competition;

/// Repository for Competition database operations
pub struct CompetitionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a competition snapshotting the calling coach as owner. The
    /// caller must have already verified ownership of `req.group_id`.
    pub async fn create(&self, coach_id: i32, req: &CreateCompetitionRequest) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            INSERT INTO competitions (date, group_id, coach_id)
            VALUES ($1, $2, $3)
            RETURNING id, date, group_id, coach_id
            "#,
        )
        .bind(req.date)
        .bind(req.group_id)
        .bind(coach_id)
        .fetch_one(self.pool)
        .await?;

        Ok(competition)
    }

    /// List a coach's competitions, most recent date first
    pub async fn list_by_coach(&self, coach_id: i32) -> Result<Vec<Competition>> {
        let competitions = sqlx::query_as::<_, Competition>(
            r#"
            SELECT id, date, group_id, coach_id
            FROM competitions
            WHERE coach_id = $1
            ORDER BY date DESC, id DESC
            "#,
        )
        .bind(coach_id)
        .fetch_all(self.pool)
        .await?;

        Ok(competitions)
    }

    /// Get a competition only if it belongs to the given coach. Absence and
    /// foreign ownership are both reported as NotFound.
    pub async fn find_owned(&self, competition_id: i32, coach_id: i32) -> Result<Competition> {
        let competition = sqlx::query_as::<_, Competition>(
            r#"
            SELECT id, date, group_id, coach_id
            FROM competitions
            WHERE id = $1 AND coach_id = $2
            "#,
        )
        .bind(competition_id)
        .bind(coach_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competition)
    }

    /// Delete an owned competition; its results cascade
    pub async fn delete(&self, competition_id: i32, coach_id: i32) -> Result<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM competitions
            WHERE id = $1 AND coach_id = $2
            "#,
        )
        .bind(competition_id)
        .bind(coach_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
