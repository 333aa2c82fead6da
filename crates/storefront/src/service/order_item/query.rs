use crate::{
    abstract_trait::order_item::{DynOrderItemQueryRepository, OrderItemQueryServiceTrait},
    domain::response::{api::ApiResponse, order_item::OrderItemResponse},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderItemQueryService {
    query: DynOrderItemQueryRepository,
    metrics: Metrics,
}

impl OrderItemQueryService {
    pub fn new(query: DynOrderItemQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "order_item_query_service_request_counter",
            "Total number of requests to the OrderItemQueryService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "order_item_query_service_request_duration",
            "Histogram of request durations for the OrderItemQueryService",
            metrics.request_duration.clone(),
        );

        Self { query, metrics }
    }
}

#[async_trait]
impl OrderItemQueryServiceTrait for OrderItemQueryService {
    async fn find_by_order(
        &self,
        order_id: i32,
    ) -> Result<ApiResponse<Vec<OrderItemResponse>>, ServiceError> {
        info!("📦 Finding items for order ID: {order_id}");

        let start = Instant::now();

        let items = match self.query.find_by_order(order_id).await {
            Ok(items) => items,
            Err(e) => {
                error!("❌ Failed to fetch items for order {order_id}: {e:?}");
                self.metrics.record(
                    Method::Get,
                    StatusUtils::Error,
                    start.elapsed().as_secs_f64(),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        self.metrics.record(
            Method::Get,
            StatusUtils::Success,
            start.elapsed().as_secs_f64(),
        );

        let data: Vec<OrderItemResponse> =
            items.into_iter().map(OrderItemResponse::from).collect();

        Ok(ApiResponse::success("Order items retrieved successfully", data))
    }
}
