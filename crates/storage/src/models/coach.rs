use chrono::NaiveDate;
use sqlx::FromRow;

/// A coach account. The password hash never leaves the storage layer;
/// responses go through `dto::coach::CoachResponse`.
#[derive(Debug, Clone, FromRow)]
pub struct Coach {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub birthday: NaiveDate,
    pub level: String,
    pub password_hash: String,
}
