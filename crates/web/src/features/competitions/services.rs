use sqlx::PgPool;
use storage::dto::competition::CreateCompetitionRequest;
use storage::dto::result::ResultEntry;
use storage::error::Result;
use storage::models::{Coach, Competition, CompetitionResult};
use storage::repository::{ChildRepository, CompetitionRepository, GroupRepository, ResultRepository};
use storage::services::results_upsert;

use crate::error::{WebError, WebResult};
use crate::pdf;

/// Create a competition on an owned group, snapshotting the caller as the
/// competition's coach.
pub async fn create_competition(
    pool: &PgPool,
    coach_id: i32,
    req: &CreateCompetitionRequest,
) -> Result<Competition> {
    GroupRepository::new(pool)
        .find_owned(req.group_id, coach_id)
        .await?;

    CompetitionRepository::new(pool).create(coach_id, req).await
}

pub async fn list_competitions(pool: &PgPool, coach_id: i32) -> Result<Vec<Competition>> {
    let repo = CompetitionRepository::new(pool);
    repo.list_by_coach(coach_id).await
}

pub async fn delete_competition(pool: &PgPool, competition_id: i32, coach_id: i32) -> Result<()> {
    let repo = CompetitionRepository::new(pool);
    repo.delete(competition_id, coach_id).await
}

/// Set-validated all-or-nothing batch upsert, delegated to the storage
/// service that owns the (competition, child) key.
pub async fn upsert_results(
    pool: &PgPool,
    competition_id: i32,
    coach_id: i32,
    entries: &[ResultEntry],
) -> Result<Vec<CompetitionResult>> {
    results_upsert::upsert_results(pool, competition_id, coach_id, entries).await
}

pub async fn list_results(
    pool: &PgPool,
    competition_id: i32,
    coach_id: i32,
) -> Result<Vec<CompetitionResult>> {
    results_upsert::list_results(pool, competition_id, coach_id).await
}

/// Gather an owned competition's rows and hand them to the renderer. The
/// group is reached through the owned competition, so the lookup itself is
/// unscoped.
pub async fn render_competition_pdf(
    pool: &PgPool,
    competition_id: i32,
    coach: &Coach,
) -> WebResult<Vec<u8>> {
    let competition = CompetitionRepository::new(pool)
        .find_owned(competition_id, coach.id)
        .await?;

    let group = GroupRepository::new(pool)
        .find_by_id(competition.group_id)
        .await?;

    let children = ChildRepository::new(pool)
        .list_by_group(competition.group_id)
        .await?;

    let results = ResultRepository::new(pool)
        .list_by_competition(competition_id)
        .await?;

    pdf::render_results_pdf(&competition, &group, coach, &children, &results)
        .map_err(|e| WebError::InternalServerError(format!("PDF rendering failed: {e}")))
}
