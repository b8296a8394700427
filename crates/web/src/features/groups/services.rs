use sqlx::PgPool;
use storage::dto::child::CreateChildRequest;
use storage::dto::group::CreateGroupRequest;
use storage::error::Result;
use storage::models::{Child, Group};
use storage::repository::{ChildRepository, GroupRepository};

/// Create a group owned by the calling coach. Groups are the only root-level
/// create; scoping is the coach id itself.
pub async fn create_group(pool: &PgPool, coach_id: i32, req: &CreateGroupRequest) -> Result<Group> {
    let repo = GroupRepository::new(pool);
    repo.create(coach_id, &req.name).await
}

pub async fn list_groups(pool: &PgPool, coach_id: i32) -> Result<Vec<Group>> {
    let repo = GroupRepository::new(pool);
    repo.list_by_coach(coach_id).await
}

pub async fn delete_group(pool: &PgPool, group_id: i32, coach_id: i32) -> Result<()> {
    let repo = GroupRepository::new(pool);
    repo.delete(group_id, coach_id).await
}

/// Add a child to an owned group
pub async fn add_child(
    pool: &PgPool,
    group_id: i32,
    coach_id: i32,
    req: &CreateChildRequest,
) -> Result<Child> {
    GroupRepository::new(pool)
        .find_owned(group_id, coach_id)
        .await?;

    ChildRepository::new(pool).create(group_id, req).await
}

/// List the children of an owned group
pub async fn list_children(pool: &PgPool, group_id: i32, coach_id: i32) -> Result<Vec<Child>> {
    GroupRepository::new(pool)
        .find_owned(group_id, coach_id)
        .await?;

    ChildRepository::new(pool).list_by_group(group_id).await
}
