use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    domain::{
        requests::order::FindAllOrders,
        response::{
            api::{ApiResponse, ApiResponsePagination},
            order::OrderResponse,
            pagination::Pagination,
        },
    },
};
use async_trait::async_trait;
use chrono::Duration;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use shared::{
    cache::CacheStore,
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderQueryService {
    query: DynOrderQueryRepository,
    metrics: Metrics,
    cache_store: Arc<CacheStore>,
}

impl OrderQueryService {
    pub fn new(
        query: DynOrderQueryRepository,
        registry: &mut Registry,
        cache_store: Arc<CacheStore>,
    ) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "order_query_service_request_counter",
            "Total number of requests to the OrderQueryService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "order_query_service_request_duration",
            "Histogram of request durations for the OrderQueryService",
            metrics.request_duration.clone(),
        );

        Self {
            query,
            metrics,
            cache_store,
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("order-query-service")
    }

    fn start_tracing(&self, operation_name: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let start_time = Instant::now();
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation_name.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation_name}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation_name.to_string())],
        );

        let cx = Context::current_with_span(span);
        TracingContext { cx, start_time }
    }

    async fn complete_tracing(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", if is_success { "SUCCESS" } else { "ERROR" }),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        tracing_ctx.cx.span().end();
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        info!(
            "📦 Finding all orders | Page: {}, Size: {}, Search: '{}'",
            req.page, req.page_size, req.search
        );

        let method = Method::Get;

        let tracing_ctx = self.start_tracing(
            "find_all_orders",
            vec![
                KeyValue::new("page", req.page.to_string()),
                KeyValue::new("page_size", req.page_size.to_string()),
                KeyValue::new("search", req.search.to_string()),
            ],
        );

        let cache_key = format!(
            "order:find_all:page:{}:size:{}:search:{}",
            req.page, req.page_size, req.search
        );

        if let Some(cache) = self
            .cache_store
            .get_from_cache::<ApiResponsePagination<Vec<OrderResponse>>>(&cache_key)
            .await
        {
            let log_message = format!("✅ Found cached orders (total: {})", cache.data.len());
            self.complete_tracing(&tracing_ctx, method, true, &log_message)
                .await;
            return Ok(cache);
        }

        let (orders, total) = match self.query.find_all(req).await {
            Ok(res) => res,
            Err(e) => {
                let log_message = format!("❌ Failed to find orders: {e:?}");
                self.complete_tracing(&tracing_ctx, method, false, &log_message)
                    .await;
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<OrderResponse> = orders.into_iter().map(OrderResponse::from).collect();

        let response = ApiResponsePagination::success(
            "Orders retrieved successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        );

        self.cache_store
            .set_to_cache(&cache_key, &response, Duration::minutes(5))
            .await;

        let log_message = format!("Found {} orders (total: {total})", response.data.len());
        self.complete_tracing(&tracing_ctx, method, true, &log_message)
            .await;

        Ok(response)
    }

    async fn find_by_id(&self, order_id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🔍 Finding order by ID: {order_id}");

        let method = Method::Get;

        let tracing_ctx = self.start_tracing(
            "find_order_by_id",
            vec![KeyValue::new("order.id", order_id.to_string())],
        );

        let order = match self.query.find_by_id(order_id).await {
            Ok(Some(order)) => order,
            Ok(None) => {
                self.complete_tracing(&tracing_ctx, method, false, "Order not found")
                    .await;
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
            Err(e) => {
                let log_message = format!("❌ Failed to fetch order {order_id}: {e:?}");
                self.complete_tracing(&tracing_ctx, method, false, &log_message)
                    .await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.complete_tracing(&tracing_ctx, method, true, "Order retrieved")
            .await;

        Ok(ApiResponse::success(
            "Order retrieved successfully",
            OrderResponse::from(order),
        ))
    }
}
