use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::CompetitionResult;

/// One submitted score sheet entry. This is the full set of mutable fields;
/// an entry for a child that already has a row overwrites exactly these.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ResultEntry {
    pub child_id: i32,

    pub participated: bool,

    #[validate(range(min = 0, max = 10, message = "Score must be between 0 and 10"))]
    pub criteria1: i32,

    #[validate(range(min = 0, max = 10, message = "Score must be between 0 and 10"))]
    pub criteria2: i32,

    #[validate(range(min = 0, max = 10, message = "Score must be between 0 and 10"))]
    pub criteria3: i32,

    #[validate(range(min = 0, max = 10, message = "Score must be between 0 and 10"))]
    pub criteria4: i32,

    #[validate(range(min = 0, max = 10, message = "Score must be between 0 and 10"))]
    pub criteria5: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResultResponse {
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

impl From<CompetitionResult> for ResultResponse {
    fn from(result: CompetitionResult) -> Self {
        Self {
            id: result.id,
            competition_id: result.competition_id,
            child_id: result.child_id,
            participated: result.participated,
            criteria1: result.criteria1,
            criteria2: result.criteria2,
            criteria3: result.criteria3,
            criteria4: result.criteria4,
            criteria5: result.criteria5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: i32) -> ResultEntry {
        ResultEntry {
            child_id: 1,
            participated: true,
            criteria1: score,
            criteria2: score,
            criteria3: score,
            criteria4: score,
            criteria5: score,
        }
    }

    #[test]
    fn test_boundary_scores_accepted() {
        assert!(entry(0).validate().is_ok());
        assert!(entry(10).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_scores_rejected() {
        assert!(entry(11).validate().is_err());
        assert!(entry(-1).validate().is_err());
    }

    #[test]
    fn test_single_bad_criterion_rejected() {
        let mut e = entry(5);
        e.criteria3 = 12;
        assert!(e.validate().is_err());
    }
}
