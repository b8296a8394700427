use sqlx::PgPool;

use crate::error::Result;
use crate::models::CompetitionResult;

/// Repository for result rows. Writes go through
/// `services::results_upsert`, which owns the (competition, child) key and
/// the batch transaction; this repository only reads.
pub struct ResultRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ResultRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a competition's results in creation order
    pub async fn list_by_competition(&self, competition_id: i32) -> Result<Vec<CompetitionResult>> {
        let results = sqlx::query_as::<_, CompetitionResult>(
            r#"
            SELECT id, competition_id, child_id, participated,
                   criteria1, criteria2, criteria3, criteria4, criteria5
            FROM results
            WHERE competition_id = $1
            ORDER BY id
            "#,
        )
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(results)
    }
}
