use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Competition;

/// Request payload for creating a new competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCompetitionRequest {
    pub date: NaiveDate,
    pub group_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionResponse {
    pub id: i32,
    pub date: NaiveDate,
    pub group_id: i32,
    pub coach_id: i32,
}

impl From<Competition> for CompetitionResponse {
    fn from(competition: Competition) -> Self {
        Self {
            id: competition.id,
            date: competition.date,
            group_id: competition.group_id,
            coach_id: competition.coach_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validates() {
        let req = CreateCompetitionRequest {
            date: NaiveDate::from_ymd_opt(2026, 5, 17).unwrap(),
            group_id: 1,
        };
        assert!(req.validate().is_ok());
    }
}
