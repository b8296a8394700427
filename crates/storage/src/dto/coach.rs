use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Coach;

/// Request payload for registering a new coach account
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterCoachRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Username must be between 1 and 255 characters"
    ))]
    pub username: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub surname: String,

    pub birthday: NaiveDate,

    #[validate(length(min = 1, max = 255))]
    pub level: String,

    #[validate(length(min = 8, max = 255, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Coach account details, without the password credential
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CoachResponse {
    pub id: i32,
    pub username: String,
    pub name: String,
    pub surname: String,
    pub birthday: NaiveDate,
    pub level: String,
}

impl From<Coach> for CoachResponse {
    fn from(coach: Coach) -> Self {
        Self {
            id: coach.id,
            username: coach.username,
            name: coach.name,
            surname: coach.surname,
            birthday: coach.birthday,
            level: coach.level,
        }
    }
}
