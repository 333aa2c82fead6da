use crate::abstract_trait::user_role::UserRoleQueryRepositoryTrait;
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::error;

#[derive(Clone)]
pub struct UserRoleQueryRepository {
    db: ConnectionPool,
}

impl UserRoleQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRoleQueryRepositoryTrait for UserRoleQueryRepository {
    async fn find_role_names(&self, user_id: i32) -> Result<Vec<String>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let roles = sqlx::query_scalar::<_, String>(
            r#"
            SELECT r.role_name
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.role_id
            WHERE ur.user_id = $1
            ORDER BY r.role_name
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch roles for user {}: {:?}", user_id, e);
            RepositoryError::from(e)
        })?;

        Ok(roles)
    }
}
