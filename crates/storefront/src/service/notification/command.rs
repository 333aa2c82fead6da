use crate::{
    abstract_trait::notification::{
        DynNotificationCommandRepository, NotificationCommandServiceTrait,
    },
    domain::{
        requests::notification::CreateNotificationRecordRequest,
        response::{api::ApiResponse, notification::NotificationResponse},
    },
    model::Order,
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::{error, info};

#[derive(Clone)]
pub struct NotificationCommandService {
    command: DynNotificationCommandRepository,
}

impl NotificationCommandService {
    pub fn new(command: DynNotificationCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl NotificationCommandServiceTrait for NotificationCommandService {
    /// Detached from the checkout request on purpose: a slow or failing
    /// notification write must neither delay nor fail the sale. The checkout
    /// has already committed by the time this runs.
    fn notify_order_created(&self, order: &Order) {
        let command = self.command.clone();
        let record = CreateNotificationRecordRequest {
            title: "New order".to_string(),
            body: format!(
                "Order {} has been placed, total {}",
                order.reference, order.total_amount
            ),
            link: Some(order.reference.clone()),
        };
        let reference = order.reference.clone();

        tokio::spawn(async move {
            match command.create(&record).await {
                Ok(notification) => {
                    info!(
                        "🔔 Notification {} recorded for order {}",
                        notification.notification_id, reference
                    );
                }
                Err(e) => {
                    error!("❌ Failed to record notification for order {reference}: {e:?}");
                }
            }
        });
    }

    async fn mark_read(
        &self,
        notification_id: i32,
    ) -> Result<ApiResponse<NotificationResponse>, ServiceError> {
        let notification = self
            .command
            .mark_read(notification_id)
            .await
            .map_err(ServiceError::Repo)?;

        Ok(ApiResponse::success(
            "Notification marked as read",
            NotificationResponse::from(notification),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::notification::NotificationCommandRepositoryTrait,
        model::{Notification, OrderSource, OrderStatus},
    };
    use shared::errors::RepositoryError;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use tokio::sync::Notify;

    struct FakeNotificationRepository {
        attempts: AtomicUsize,
        fail: bool,
        done: Notify,
    }

    impl FakeNotificationRepository {
        fn new(fail: bool) -> Self {
            Self {
                attempts: AtomicUsize::new(0),
                fail,
                done: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl NotificationCommandRepositoryTrait for FakeNotificationRepository {
        async fn create(
            &self,
            req: &CreateNotificationRecordRequest,
        ) -> Result<Notification, RepositoryError> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            let result = if self.fail {
                Err(RepositoryError::Custom("redis is on fire".into()))
            } else {
                Ok(Notification {
                    notification_id: 1,
                    title: req.title.clone(),
                    body: req.body.clone(),
                    link: req.link.clone(),
                    is_read: false,
                    created_at: None,
                })
            };
            self.done.notify_one();
            result
        }

        async fn mark_read(&self, _notification_id: i32) -> Result<Notification, RepositoryError> {
            Err(RepositoryError::NotFound)
        }
    }

    fn paid_order(reference: &str) -> Order {
        Order {
            order_id: 1,
            reference: reference.to_string(),
            user_id: None,
            cashier_id: Some(9),
            source: OrderSource::Pos,
            status: OrderStatus::Paid,
            subtotal: 150000,
            shipping_fee: 0,
            discount_amount: 0,
            total_amount: 150000,
            payment_method: "cash".into(),
            recipient_name: "Walk-in".into(),
            recipient_phone: "0800000000".into(),
            shipping_address: "Counter pickup".into(),
            province: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn notification_is_written_from_a_detached_task() {
        let repo = Arc::new(FakeNotificationRepository::new(false));
        let service = NotificationCommandService::new(repo.clone());

        service.notify_order_created(&paid_order("POS-AAAA111111"));

        repo.done.notified().await;
        assert_eq!(repo.attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn repository_failure_is_swallowed() {
        let repo = Arc::new(FakeNotificationRepository::new(true));
        let service = NotificationCommandService::new(repo.clone());

        // must not panic or surface anything to the caller
        service.notify_order_created(&paid_order("POS-BBBB222222"));

        repo.done.notified().await;
        assert_eq!(repo.attempts.load(Ordering::SeqCst), 1);
    }
}
