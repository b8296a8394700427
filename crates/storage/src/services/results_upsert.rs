//! Set-validated bulk upsert of competition results.
//!
//! Callers resubmit whole score sheets per competition, so rows are keyed by
//! the natural (competition_id, child_id) pair instead of the surrogate id.
//! The batch is validated against the group's membership set before any
//! write, and all writes happen inside one transaction: either every entry
//! commits or none does.

use std::collections::HashSet;

use sqlx::PgPool;

use crate::dto::result::ResultEntry;
use crate::error::{Result, StorageError};
use crate::models::CompetitionResult;
use crate::repository::{CompetitionRepository, ResultRepository};

/// Insert or update score sheet entries for an owned competition, returning
/// the persisted rows in input order.
pub async fn upsert_results(
    pool: &PgPool,
    competition_id: i32,
    coach_id: i32,
    entries: &[ResultEntry],
) -> Result<Vec<CompetitionResult>> {
    let competition = CompetitionRepository::new(pool)
        .find_owned(competition_id, coach_id)
        .await?;

    let member_ids: HashSet<i32> =
        sqlx::query_scalar::<_, i32>("SELECT id FROM children WHERE group_id = $1")
            .bind(competition.group_id)
            .fetch_all(pool)
            .await?
            .into_iter()
            .collect();

    check_membership(entries, &member_ids)?;

    let mut tx = pool.begin().await?;

    // Lock the competition row for the duration of the batch. There is no
    // storage-level unique index on (competition_id, child_id), so without
    // this two concurrent batches could both miss the existing-row check
    // and insert duplicate rows for the same child.
    sqlx::query("SELECT id FROM competitions WHERE id = $1 FOR UPDATE")
        .bind(competition_id)
        .execute(&mut *tx)
        .await?;

    let mut rows = Vec::with_capacity(entries.len());

    for entry in entries {
        let existing = sqlx::query_scalar::<_, i32>(
            "SELECT id FROM results WHERE competition_id = $1 AND child_id = $2",
        )
        .bind(competition_id)
        .bind(entry.child_id)
        .fetch_optional(&mut *tx)
        .await?;

        let row = match existing {
            Some(result_id) => {
                sqlx::query_as::<_, CompetitionResult>(
                    r#"
                    UPDATE results
                    SET participated = $2,
                        criteria1 = $3, criteria2 = $4, criteria3 = $5,
                        criteria4 = $6, criteria5 = $7
                    WHERE id = $1
                    RETURNING id, competition_id, child_id, participated,
                              criteria1, criteria2, criteria3, criteria4, criteria5
                    "#,
                )
                .bind(result_id)
                .bind(entry.participated)
                .bind(entry.criteria1)
                .bind(entry.criteria2)
                .bind(entry.criteria3)
                .bind(entry.criteria4)
                .bind(entry.criteria5)
                .fetch_one(&mut *tx)
                .await?
            }
            None => {
                sqlx::query_as::<_, CompetitionResult>(
                    r#"
                    INSERT INTO results (competition_id, child_id, participated,
                                         criteria1, criteria2, criteria3, criteria4, criteria5)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                    RETURNING id, competition_id, child_id, participated,
                              criteria1, criteria2, criteria3, criteria4, criteria5
                    "#,
                )
                .bind(competition_id)
                .bind(entry.child_id)
                .bind(entry.participated)
                .bind(entry.criteria1)
                .bind(entry.criteria2)
                .bind(entry.criteria3)
                .bind(entry.criteria4)
                .bind(entry.criteria5)
                .fetch_one(&mut *tx)
                .await?
            }
        };

        rows.push(row);
    }

    tx.commit().await?;

    Ok(rows)
}

/// Ownership-checked read of a competition's results in creation order
pub async fn list_results(
    pool: &PgPool,
    competition_id: i32,
    coach_id: i32,
) -> Result<Vec<CompetitionResult>> {
    CompetitionRepository::new(pool)
        .find_owned(competition_id, coach_id)
        .await?;

    ResultRepository::new(pool)
        .list_by_competition(competition_id)
        .await
}

/// Reject the whole batch if any entry references a child outside the
/// competition's group. Entries are checked in input order so the error
/// names the first offending child.
fn check_membership(entries: &[ResultEntry], member_ids: &HashSet<i32>) -> Result<()> {
    for entry in entries {
        if !member_ids.contains(&entry.child_id) {
            return Err(StorageError::ForeignChild(entry.child_id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(child_id: i32) -> ResultEntry {
        ResultEntry {
            child_id,
            participated: true,
            criteria1: 5,
            criteria2: 5,
            criteria3: 5,
            criteria4: 5,
            criteria5: 5,
        }
    }

    #[test]
    fn test_all_members_pass() {
        let members: HashSet<i32> = [1, 2, 3].into_iter().collect();
        let entries = vec![entry(1), entry(3)];
        assert!(check_membership(&entries, &members).is_ok());
    }

    #[test]
    fn test_foreign_child_rejects_batch() {
        let members: HashSet<i32> = [1, 2].into_iter().collect();
        let entries = vec![entry(1), entry(99), entry(2)];
        match check_membership(&entries, &members) {
            Err(StorageError::ForeignChild(id)) => assert_eq!(id, 99),
            other => panic!("expected ForeignChild, got {other:?}"),
        }
    }

    #[test]
    fn test_first_offender_reported() {
        let members: HashSet<i32> = [1].into_iter().collect();
        let entries = vec![entry(7), entry(8)];
        match check_membership(&entries, &members) {
            Err(StorageError::ForeignChild(id)) => assert_eq!(id, 7),
            other => panic!("expected ForeignChild, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_batch_passes() {
        let members: HashSet<i32> = [1].into_iter().collect();
        assert!(check_membership(&[], &members).is_ok());
    }

    #[test]
    fn test_duplicate_members_pass() {
        // Last entry wins at the storage layer; membership does not dedupe.
        let members: HashSet<i32> = [1].into_iter().collect();
        let entries = vec![entry(1), entry(1)];
        assert!(check_membership(&entries, &members).is_ok());
    }
}
