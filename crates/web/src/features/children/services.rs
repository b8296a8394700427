use sqlx::PgPool;
use storage::error::Result;
use storage::repository::ChildRepository;

/// Delete a child if the caller owns the child's group. The scoping join
/// happens inside the repository delete itself.
pub async fn delete_child(pool: &PgPool, child_id: i32, coach_id: i32) -> Result<()> {
    let repo = ChildRepository::new(pool);
    repo.delete(child_id, coach_id).await
}
