use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Child {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub birthday: NaiveDate,
    pub group_id: i32,
}
