use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Child;

/// Request payload for adding a child to a group
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateChildRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub surname: String,

    pub birthday: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChildResponse {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub birthday: NaiveDate,
    pub group_id: i32,
}

impl From<Child> for ChildResponse {
    fn from(child: Child) -> Self {
        Self {
            id: child.id,
            name: child.name,
            surname: child.surname,
            birthday: child.birthday,
            group_id: child.group_id,
        }
    }
}
