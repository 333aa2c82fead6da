use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynUserRoleQueryRepository = Arc<dyn UserRoleQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserRoleQueryRepositoryTrait {
    async fn find_role_names(&self, user_id: i32) -> Result<Vec<String>, RepositoryError>;
}
