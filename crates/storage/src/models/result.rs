use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One child's score sheet for one competition. At most one row exists per
/// (competition_id, child_id) pair; the upsert service owns that key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CompetitionResult {
    pub id: i32,
    pub competition_id: i32,
    pub child_id: i32,
    pub participated: bool,
    pub criteria1: i32,
    pub criteria2: i32,
    pub criteria3: i32,
    pub criteria4: i32,
    pub criteria5: i32,
}

impl CompetitionResult {
    pub fn total(&self) -> i32 {
        self.criteria1 + self.criteria2 + self.criteria3 + self.criteria4 + self.criteria5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_sums_all_criteria() {
        let result = CompetitionResult {
            id: 1,
            competition_id: 1,
            child_id: 1,
            participated: true,
            criteria1: 10,
            criteria2: 9,
            criteria3: 8,
            criteria4: 7,
            criteria5: 6,
        };
        assert_eq!(result.total(), 40);
    }
}
