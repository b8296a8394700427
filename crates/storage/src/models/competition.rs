use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A dated scoring event for one group. `coach_id` is stored directly even
/// though it is derivable through the group, so ownership checks stay a
/// single-table predicate.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Competition {
    pub id: i32,
    pub date: NaiveDate,
    pub group_id: i32,
    pub coach_id: i32,
}
