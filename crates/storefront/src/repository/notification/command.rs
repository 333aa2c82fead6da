use crate::{
    abstract_trait::notification::NotificationCommandRepositoryTrait,
    domain::requests::notification::CreateNotificationRecordRequest, model::Notification,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

const NOTIFICATION_COLUMNS: &str =
    "notification_id, title, body, link, is_read, created_at";

pub struct NotificationCommandRepository {
    db: ConnectionPool,
}

impl NotificationCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationCommandRepositoryTrait for NotificationCommandRepository {
    async fn create(
        &self,
        req: &CreateNotificationRecordRequest,
    ) -> Result<Notification, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Notification>(&format!(
            r#"
            INSERT INTO notifications (title, body, link, is_read, created_at)
            VALUES ($1, $2, $3, FALSE, current_timestamp)
            RETURNING {NOTIFICATION_COLUMNS}
            "#
        ))
        .bind(&req.title)
        .bind(&req.body)
        .bind(&req.link)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create notification {}: {:?}", req.title, err);
            RepositoryError::from(err)
        })?;

        info!("🔔 Created notification {}", result.notification_id);
        Ok(result)
    }

    async fn mark_read(&self, notification_id: i32) -> Result<Notification, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Notification>(&format!(
            r#"
            UPDATE notifications
            SET is_read = TRUE
            WHERE notification_id = $1
            RETURNING {NOTIFICATION_COLUMNS}
            "#
        ))
        .bind(notification_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to mark notification {} read: {:?}",
                notification_id, err
            );
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        Ok(result)
    }
}
