use crate::{
    abstract_trait::notification::{
        DynNotificationQueryRepository, NotificationQueryServiceTrait,
    },
    domain::{
        requests::notification::FindAllNotifications,
        response::{
            api::ApiResponsePagination, notification::NotificationResponse,
            pagination::Pagination,
        },
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct NotificationQueryService {
    query: DynNotificationQueryRepository,
}

impl NotificationQueryService {
    pub fn new(query: DynNotificationQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl NotificationQueryServiceTrait for NotificationQueryService {
    async fn find_all(
        &self,
        req: &FindAllNotifications,
    ) -> Result<ApiResponsePagination<Vec<NotificationResponse>>, ServiceError> {
        info!(
            "🔔 Finding notifications | Page: {}, Size: {}",
            req.page, req.page_size
        );

        let (notifications, total) = self.query.find_all(req).await.map_err(|e| {
            error!("❌ Failed to fetch notifications: {e:?}");
            ServiceError::Repo(e)
        })?;

        let data: Vec<NotificationResponse> = notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect();

        Ok(ApiResponsePagination::success(
            "Notifications retrieved successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        ))
    }
}
