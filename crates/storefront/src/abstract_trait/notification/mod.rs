use crate::{
    domain::{
        requests::notification::{CreateNotificationRecordRequest, FindAllNotifications},
        response::{
            api::{ApiResponse, ApiResponsePagination},
            notification::NotificationResponse,
        },
    },
    model::{Notification, Order},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynNotificationCommandRepository =
    Arc<dyn NotificationCommandRepositoryTrait + Send + Sync>;
pub type DynNotificationQueryRepository = Arc<dyn NotificationQueryRepositoryTrait + Send + Sync>;
pub type DynNotificationCommandService = Arc<dyn NotificationCommandServiceTrait + Send + Sync>;
pub type DynNotificationQueryService = Arc<dyn NotificationQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait NotificationCommandRepositoryTrait {
    async fn create(
        &self,
        req: &CreateNotificationRecordRequest,
    ) -> Result<Notification, RepositoryError>;

    async fn mark_read(&self, notification_id: i32) -> Result<Notification, RepositoryError>;
}

#[async_trait]
pub trait NotificationQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllNotifications,
    ) -> Result<(Vec<Notification>, i64), RepositoryError>;
}

#[async_trait]
pub trait NotificationCommandServiceTrait {
    /// Best-effort: runs detached from the caller, failures are logged and
    /// never reach the checkout response.
    fn notify_order_created(&self, order: &Order);

    async fn mark_read(
        &self,
        notification_id: i32,
    ) -> Result<ApiResponse<NotificationResponse>, ServiceError>;
}

#[async_trait]
pub trait NotificationQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllNotifications,
    ) -> Result<ApiResponsePagination<Vec<NotificationResponse>>, ServiceError>;
}
