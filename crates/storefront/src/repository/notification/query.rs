use crate::{
    abstract_trait::notification::NotificationQueryRepositoryTrait,
    domain::requests::notification::FindAllNotifications, model::Notification,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::FromRow;
use tracing::error;

#[derive(FromRow)]
struct NotificationRow {
    #[sqlx(flatten)]
    notification: Notification,
    total_count: i64,
}

#[derive(Clone)]
pub struct NotificationQueryRepository {
    db: ConnectionPool,
}

impl NotificationQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationQueryRepositoryTrait for NotificationQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllNotifications,
    ) -> Result<(Vec<Notification>, i64), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) * req.page_size) as i64;

        let rows = sqlx::query_as::<_, NotificationRow>(
            r#"
            SELECT n.*, COUNT(*) OVER() AS total_count
            FROM notifications n
            ORDER BY n.created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch notifications: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows.first().map(|r| r.total_count).unwrap_or(0);
        let notifications = rows.into_iter().map(|r| r.notification).collect();

        Ok((notifications, total))
    }
}
