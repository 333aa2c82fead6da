use crate::{
    abstract_trait::{
        notification::DynNotificationCommandService,
        order::{
            repository::{DynOrderCommandRepository, DynOrderQueryRepository},
            service::OrderCommandServiceTrait,
        },
    },
    domain::{
        requests::order::{
            CreateOrderItemRecordRequest, CreateOrderRecordRequest, CreatePosOrderRequest,
            UpdateOrderStatusRequest,
        },
        response::{
            api::ApiResponse,
            order::{CheckoutResponse, OrderResponse},
            order_item::OrderItemResponse,
        },
    },
    model::{OrderSource, OrderStatus},
};
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils, TracingContext, generate_random_string},
};

use async_trait::async_trait;
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use prometheus_client::registry::Registry;
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderCommandService {
    command: DynOrderCommandRepository,
    query: DynOrderQueryRepository,
    notification: DynNotificationCommandService,
    metrics: Metrics,
}

pub struct OrderCommandServiceDeps {
    pub command: DynOrderCommandRepository,
    pub query: DynOrderQueryRepository,
    pub notification: DynNotificationCommandService,
}

impl OrderCommandService {
    pub fn new(deps: OrderCommandServiceDeps, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "order_command_service_request_counter",
            "Total number of requests to the OrderCommandService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "order_command_service_request_duration",
            "Histogram of request durations for the OrderCommandService",
            metrics.request_duration.clone(),
        );

        Self {
            command: deps.command,
            query: deps.query,
            notification: deps.notification,
            metrics,
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer("order-command-service")
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

    async fn complete_tracing_success(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, true, message)
            .await;
    }

    async fn complete_tracing_error(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        error_message: &str,
    ) {
        self.complete_tracing_internal(tracing_ctx, method, false, error_message)
            .await;
    }

    async fn complete_tracing_internal(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        let elapsed = tracing_ctx.start_time.elapsed().as_secs_f64();

        tracing_ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
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

    /// The POS client sends the totals it showed the cashier. They are
    /// recomputed here from the cart lines and rejected on any mismatch
    /// instead of being trusted.
    fn verify_totals(req: &CreatePosOrderRequest) -> Result<(), ServiceError> {
        let computed_subtotal: i64 = req
            .items
            .iter()
            .map(|line| line.price * line.quantity as i64)
            .sum();

        let mut problems = Vec::new();

        if computed_subtotal != req.subtotal {
            problems.push(format!(
                "subtotal {} does not match cart lines ({computed_subtotal})",
                req.subtotal
            ));
        }

        let computed_total = computed_subtotal + req.shipping_fee - req.discount_amount;
        if computed_total != req.total_amount {
            problems.push(format!(
                "total_amount {} does not match subtotal plus shipping minus discount ({computed_total})",
                req.total_amount
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(problems))
        }
    }
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn create_pos_order(
        &self,
        cashier_id: i32,
        req: &CreatePosOrderRequest,
    ) -> Result<ApiResponse<CheckoutResponse>, ServiceError> {
        info!("🛒 Creating POS order for cashier_id={cashier_id}");

        let method = Method::Post;

        let tracing_ctx = self.start_tracing(
            "create_pos_order",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "checkout"),
                KeyValue::new("order.cashier_id", cashier_id.to_string()),
                KeyValue::new("order.lines", req.items.len().to_string()),
            ],
        );

        if req.items.is_empty() {
            self.complete_tracing_error(&tracing_ctx, method, "Cart is empty")
                .await;
            return Err(ServiceError::Validation(vec!["Cart cannot be empty".into()]));
        }

        if let Err(e) = Self::verify_totals(req) {
            self.complete_tracing_error(&tracing_ctx, method, "Totals mismatch")
                .await;
            return Err(e);
        }

        let reference = format!(
            "POS-{}",
            generate_random_string(10).map_err(|e| ServiceError::Internal(e.to_string()))?
        );

        // cash sales settle at the counter: the order is born paid
        let record = CreateOrderRecordRequest {
            reference,
            user_id: req.customer_id,
            cashier_id: Some(cashier_id),
            source: OrderSource::Pos,
            status: OrderStatus::Paid,
            subtotal: req.subtotal,
            shipping_fee: req.shipping_fee,
            discount_amount: req.discount_amount,
            total_amount: req.total_amount,
            payment_method: req.payment_method.clone(),
            recipient_name: req.recipient_name.clone(),
            recipient_phone: req.recipient_phone.clone(),
            shipping_address: req.shipping_address.clone(),
            province: req.province.clone(),
        };

        let item_records: Vec<CreateOrderItemRecordRequest> = req
            .items
            .iter()
            .map(|line| CreateOrderItemRecordRequest {
                product_id: line.product_id,
                variant_id: line.variant_id,
                product_name: line.display_name.clone(),
                quantity: line.quantity,
                price_at_purchase: line.price,
            })
            .collect();

        let (order, items) = match self.command.create_checkout(&record, &item_records).await {
            Ok(created) => created,
            Err(e) => {
                error!("❌ Checkout failed: {e:?}");
                self.complete_tracing_error(&tracing_ctx, method, "Checkout failed")
                    .await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.notification.notify_order_created(&order);

        self.complete_tracing_success(&tracing_ctx, method, "Order created")
            .await;

        let response = CheckoutResponse {
            order: OrderResponse::from(order),
            items: items.into_iter().map(OrderItemResponse::from).collect(),
        };

        Ok(ApiResponse::success("Order created successfully", response))
    }

    async fn update_order_status(
        &self,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("✏️ Updating status of order ID={order_id} to {}", req.status);

        let method = Method::Put;

        let tracing_ctx = self.start_tracing(
            "update_order_status",
            vec![
                KeyValue::new("component", "order"),
                KeyValue::new("operation", "update_status"),
                KeyValue::new("order.id", order_id.to_string()),
            ],
        );

        let next: OrderStatus = match req.status.parse() {
            Ok(status) => status,
            Err(e) => {
                self.complete_tracing_error(&tracing_ctx, method, "Unknown status")
                    .await;
                return Err(ServiceError::Validation(vec![e]));
            }
        };

        let current = match self.query.find_by_id(order_id).await {
            Ok(Some(order)) => order,
            Ok(None) => {
                self.complete_tracing_error(&tracing_ctx, method, "Order not found")
                    .await;
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
            Err(e) => {
                self.complete_tracing_error(&tracing_ctx, method, "Failed to fetch order")
                    .await;
                return Err(ServiceError::Repo(e));
            }
        };

        if !current.status.can_transition_to(next) {
            self.complete_tracing_error(&tracing_ctx, method, "Illegal status transition")
                .await;
            return Err(ServiceError::InvalidStatusTransition {
                from: current.status.to_string(),
                to: next.to_string(),
            });
        }

        let updated = match self.command.update_status(order_id, current.status, next).await {
            Ok(order) => order,
            Err(e) => {
                self.complete_tracing_error(&tracing_ctx, method, "Failed to update status")
                    .await;
                return Err(ServiceError::Repo(e));
            }
        };

        self.complete_tracing_success(&tracing_ctx, method, "Order status updated")
            .await;

        Ok(ApiResponse::success(
            "Order status updated successfully",
            OrderResponse::from(updated),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            notification::{
                DynNotificationCommandService, NotificationCommandServiceTrait,
            },
            order::repository::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
        },
        domain::{
            requests::order::{CartItemRequest, FindAllOrders},
            response::notification::NotificationResponse,
        },
        model::{Order, OrderItem},
    };
    use shared::errors::RepositoryError;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct FakeVariant {
        name: String,
        stock: i32,
    }

    #[derive(Clone)]
    struct FakeProduct {
        name: String,
        live_price: i64,
        stock: i32,
        has_variants: bool,
        variants: HashMap<i32, FakeVariant>,
    }

    /// In-memory stand-in honoring the repository contract: all-or-nothing
    /// writes, conditional decrements, typed rejections.
    struct FakeOrderRepository {
        products: Mutex<HashMap<i32, FakeProduct>>,
        orders: Mutex<Vec<(Order, Vec<OrderItem>)>>,
        fail_item_insert: bool,
    }

    impl FakeOrderRepository {
        fn new(products: HashMap<i32, FakeProduct>) -> Self {
            Self {
                products: Mutex::new(products),
                orders: Mutex::new(Vec::new()),
                fail_item_insert: false,
            }
        }

        fn stock_of(&self, product_id: i32) -> i32 {
            self.products.lock().unwrap()[&product_id].stock
        }

        fn variant_stock_of(&self, product_id: i32, variant_id: i32) -> i32 {
            self.products.lock().unwrap()[&product_id].variants[&variant_id].stock
        }

        fn order_count(&self) -> usize {
            self.orders.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl OrderCommandRepositoryTrait for FakeOrderRepository {
        async fn create_checkout(
            &self,
            order: &CreateOrderRecordRequest,
            items: &[CreateOrderItemRecordRequest],
        ) -> Result<(Order, Vec<OrderItem>), RepositoryError> {
            if self.fail_item_insert {
                return Err(RepositoryError::Custom(
                    "simulated item insert failure".into(),
                ));
            }

            // stage against a copy so a mid-cart rejection leaves nothing behind
            let mut staged = self.products.lock().unwrap().clone();
            let order_id = self.order_count() as i32 + 1;
            let mut created_items = Vec::new();

            for (idx, item) in items.iter().enumerate() {
                let product = staged
                    .get_mut(&item.product_id)
                    .ok_or(RepositoryError::NotFound)?;

                match item.variant_id {
                    None => {
                        if product.has_variants {
                            return Err(RepositoryError::VariantRequired(product.name.clone()));
                        }
                        if product.stock < item.quantity {
                            return Err(RepositoryError::InsufficientStock {
                                name: product.name.clone(),
                                requested: item.quantity,
                                available: product.stock,
                            });
                        }
                        product.stock -= item.quantity;
                    }
                    Some(variant_id) => {
                        let product_name = product.name.clone();
                        let variant = product
                            .variants
                            .get_mut(&variant_id)
                            .ok_or(RepositoryError::NotFound)?;
                        if variant.stock < item.quantity {
                            return Err(RepositoryError::InsufficientStock {
                                name: format!("{product_name} ({})", variant.name),
                                requested: item.quantity,
                                available: variant.stock,
                            });
                        }
                        variant.stock -= item.quantity;
                    }
                }

                created_items.push(OrderItem {
                    order_item_id: idx as i32 + 1,
                    order_id,
                    product_id: item.product_id,
                    variant_id: item.variant_id,
                    product_name: item.product_name.clone(),
                    quantity: item.quantity,
                    price_at_purchase: item.price_at_purchase,
                    created_at: None,
                });
            }

            let created = Order {
                order_id,
                reference: order.reference.clone(),
                user_id: order.user_id,
                cashier_id: order.cashier_id,
                source: order.source,
                status: order.status,
                subtotal: order.subtotal,
                shipping_fee: order.shipping_fee,
                discount_amount: order.discount_amount,
                total_amount: order.total_amount,
                payment_method: order.payment_method.clone(),
                recipient_name: order.recipient_name.clone(),
                recipient_phone: order.recipient_phone.clone(),
                shipping_address: order.shipping_address.clone(),
                province: order.province.clone(),
                created_at: None,
                updated_at: None,
            };

            *self.products.lock().unwrap() = staged;
            self.orders
                .lock()
                .unwrap()
                .push((created.clone(), created_items.clone()));

            Ok((created, created_items))
        }

        async fn update_status(
            &self,
            order_id: i32,
            from: OrderStatus,
            to: OrderStatus,
        ) -> Result<Order, RepositoryError> {
            let mut orders = self.orders.lock().unwrap();
            let entry = orders
                .iter_mut()
                .find(|(o, _)| o.order_id == order_id)
                .ok_or(RepositoryError::NotFound)?;

            if entry.0.status != from {
                return Err(RepositoryError::Conflict(format!(
                    "Order {order_id} is no longer in status {from}"
                )));
            }

            entry.0.status = to;
            Ok(entry.0.clone())
        }
    }

    struct FakeOrderQuery {
        orders: Arc<FakeOrderRepository>,
    }

    #[async_trait]
    impl OrderQueryRepositoryTrait for FakeOrderQuery {
        async fn find_all(
            &self,
            _req: &FindAllOrders,
        ) -> Result<(Vec<Order>, i64), RepositoryError> {
            let orders = self.orders.orders.lock().unwrap();
            let all: Vec<Order> = orders.iter().map(|(o, _)| o.clone()).collect();
            let total = all.len() as i64;
            Ok((all, total))
        }

        async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, RepositoryError> {
            let orders = self.orders.orders.lock().unwrap();
            Ok(orders
                .iter()
                .find(|(o, _)| o.order_id == order_id)
                .map(|(o, _)| o.clone()))
        }
    }

    #[derive(Default)]
    struct FakeNotifier {
        notified: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl NotificationCommandServiceTrait for FakeNotifier {
        fn notify_order_created(&self, order: &Order) {
            self.notified.lock().unwrap().push(order.reference.clone());
        }

        async fn mark_read(
            &self,
            _notification_id: i32,
        ) -> Result<ApiResponse<NotificationResponse>, ServiceError> {
            unimplemented!("not used by these tests")
        }
    }

    fn dog_food(stock: i32) -> HashMap<i32, FakeProduct> {
        HashMap::from([(
            1,
            FakeProduct {
                name: "Dog Food".into(),
                live_price: 60000,
                stock,
                has_variants: false,
                variants: HashMap::new(),
            },
        )])
    }

    fn pos_request(items: Vec<CartItemRequest>, shipping: i64, discount: i64) -> CreatePosOrderRequest {
        let subtotal: i64 = items.iter().map(|l| l.price * l.quantity as i64).sum();
        CreatePosOrderRequest {
            items,
            subtotal,
            shipping_fee: shipping,
            discount_amount: discount,
            total_amount: subtotal + shipping - discount,
            payment_method: "cash".into(),
            recipient_name: "Walk-in".into(),
            recipient_phone: "0800000000".into(),
            shipping_address: "Counter pickup".into(),
            province: None,
            customer_id: None,
        }
    }

    fn cart_line(product_id: i32, qty: i32, price: i64, name: &str) -> CartItemRequest {
        CartItemRequest {
            product_id,
            variant_id: None,
            quantity: qty,
            price,
            display_name: name.into(),
        }
    }

    struct Harness {
        service: OrderCommandService,
        repo: Arc<FakeOrderRepository>,
        notifier: Arc<FakeNotifier>,
    }

    fn harness(products: HashMap<i32, FakeProduct>, fail_item_insert: bool) -> Harness {
        let mut repo = FakeOrderRepository::new(products);
        repo.fail_item_insert = fail_item_insert;
        let repo = Arc::new(repo);
        let notifier = Arc::new(FakeNotifier::default());

        let deps = OrderCommandServiceDeps {
            command: repo.clone(),
            query: Arc::new(FakeOrderQuery {
                orders: repo.clone(),
            }),
            notification: notifier.clone() as DynNotificationCommandService,
        };

        let service = OrderCommandService::new(deps, &mut Registry::default());

        Harness {
            service,
            repo,
            notifier,
        }
    }

    #[tokio::test]
    async fn checkout_succeeds_and_decrements_stock() {
        let h = harness(dog_food(5), false);
        let req = pos_request(vec![cart_line(1, 3, 50000, "Dog Food")], 10000, 5000);

        let response = h.service.create_pos_order(77, &req).await.expect("checkout");

        assert_eq!(response.status, "success");
        assert_eq!(response.data.order.status, "paid");
        assert_eq!(response.data.order.source, "pos");
        assert_eq!(response.data.order.subtotal, 150000);
        assert_eq!(response.data.order.total_amount, 155000);
        assert_eq!(response.data.order.cashier_id, Some(77));
        assert_eq!(response.data.items.len(), 1);

        assert_eq!(h.repo.stock_of(1), 2);
        assert_eq!(h.repo.order_count(), 1);
        assert_eq!(h.notifier.notified.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn insufficient_stock_rejects_whole_cart() {
        let h = harness(dog_food(2), false);
        let req = pos_request(vec![cart_line(1, 3, 50000, "Dog Food")], 0, 0);

        let err = h.service.create_pos_order(77, &req).await.unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Dog Food"), "message was: {message}");
        assert!(message.contains("2 available"), "message was: {message}");

        assert_eq!(h.repo.stock_of(1), 2);
        assert_eq!(h.repo.order_count(), 0);
        assert!(h.notifier.notified.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn multi_line_cart_fails_atomically() {
        let mut products = dog_food(5);
        products.insert(
            2,
            FakeProduct {
                name: "Cat Litter".into(),
                live_price: 30000,
                stock: 1,
                has_variants: false,
                variants: HashMap::new(),
            },
        );
        let h = harness(products, false);

        let req = pos_request(
            vec![
                cart_line(1, 3, 50000, "Dog Food"),
                cart_line(2, 4, 30000, "Cat Litter"),
            ],
            0,
            0,
        );

        let err = h.service.create_pos_order(77, &req).await.unwrap_err();
        assert!(err.to_string().contains("Cat Litter"));

        // the passing first line must not leak a partial decrement
        assert_eq!(h.repo.stock_of(1), 5);
        assert_eq!(h.repo.stock_of(2), 1);
        assert_eq!(h.repo.order_count(), 0);
    }

    #[tokio::test]
    async fn item_insert_failure_leaves_no_orphan_order() {
        let h = harness(dog_food(5), true);
        let req = pos_request(vec![cart_line(1, 1, 50000, "Dog Food")], 0, 0);

        let err = h.service.create_pos_order(77, &req).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::Custom(_))
        ));

        assert_eq!(h.repo.order_count(), 0);
        assert_eq!(h.repo.stock_of(1), 5);
        assert!(h.notifier.notified.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn price_at_purchase_is_the_cart_price_not_the_live_price() {
        // live price is 60000, the cashier sold at 50000
        let h = harness(dog_food(5), false);
        let req = pos_request(vec![cart_line(1, 2, 50000, "Dog Food")], 0, 0);

        let response = h.service.create_pos_order(77, &req).await.expect("checkout");

        assert_eq!(response.data.items[0].price_at_purchase, 50000);
        assert_ne!(
            response.data.items[0].price_at_purchase,
            h.repo.products.lock().unwrap()[&1].live_price
        );
    }

    #[tokio::test]
    async fn mismatched_subtotal_is_rejected() {
        let h = harness(dog_food(5), false);
        let mut req = pos_request(vec![cart_line(1, 3, 50000, "Dog Food")], 0, 0);
        req.subtotal = 140000;

        let err = h.service.create_pos_order(77, &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(h.repo.order_count(), 0);
        assert_eq!(h.repo.stock_of(1), 5);
    }

    #[tokio::test]
    async fn mismatched_total_is_rejected() {
        let h = harness(dog_food(5), false);
        let mut req = pos_request(vec![cart_line(1, 3, 50000, "Dog Food")], 10000, 0);
        req.total_amount = 150000;

        let err = h.service.create_pos_order(77, &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(h.repo.order_count(), 0);
    }

    #[tokio::test]
    async fn empty_cart_is_rejected() {
        let h = harness(dog_food(5), false);
        let req = pos_request(vec![], 0, 0);

        let err = h.service.create_pos_order(77, &req).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn variant_product_requires_a_variant_line() {
        let products = HashMap::from([(
            3,
            FakeProduct {
                name: "Bird Seed".into(),
                live_price: 25000,
                stock: 100,
                has_variants: true,
                variants: HashMap::from([(
                    30,
                    FakeVariant {
                        name: "1kg".into(),
                        stock: 4,
                    },
                )]),
            },
        )]);
        let h = harness(products, false);

        let req = pos_request(vec![cart_line(3, 1, 25000, "Bird Seed")], 0, 0);
        let err = h.service.create_pos_order(77, &req).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::VariantRequired(_))
        ));
        assert_eq!(h.repo.order_count(), 0);
    }

    #[tokio::test]
    async fn variant_stock_is_the_authoritative_counter() {
        let products = HashMap::from([(
            3,
            FakeProduct {
                name: "Bird Seed".into(),
                live_price: 25000,
                // plenty of product-level stock that must not be touched
                stock: 100,
                has_variants: true,
                variants: HashMap::from([(
                    30,
                    FakeVariant {
                        name: "1kg".into(),
                        stock: 4,
                    },
                )]),
            },
        )]);
        let h = harness(products, false);

        let mut line = cart_line(3, 3, 25000, "Bird Seed 1kg");
        line.variant_id = Some(30);
        let req = pos_request(vec![line], 0, 0);

        h.service.create_pos_order(77, &req).await.expect("checkout");

        assert_eq!(h.repo.variant_stock_of(3, 30), 1);
        assert_eq!(h.repo.stock_of(3), 100);
    }

    #[tokio::test]
    async fn status_update_follows_the_state_machine() {
        let h = harness(dog_food(5), false);
        let req = pos_request(vec![cart_line(1, 1, 50000, "Dog Food")], 0, 0);
        let created = h.service.create_pos_order(77, &req).await.expect("checkout");
        let order_id = created.data.order.id;

        let packed = h
            .service
            .update_order_status(
                order_id,
                &UpdateOrderStatusRequest {
                    status: "packed".into(),
                },
            )
            .await
            .expect("paid -> packed is legal");
        assert_eq!(packed.data.status, "packed");

        let err = h
            .service
            .update_order_status(
                order_id,
                &UpdateOrderStatusRequest {
                    status: "delivered".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::InvalidStatusTransition { .. }
        ));
    }

    #[tokio::test]
    async fn unknown_status_is_rejected() {
        let h = harness(dog_food(5), false);
        let req = pos_request(vec![cart_line(1, 1, 50000, "Dog Food")], 0, 0);
        let created = h.service.create_pos_order(77, &req).await.expect("checkout");

        let err = h
            .service
            .update_order_status(
                created.data.order.id,
                &UpdateOrderStatusRequest {
                    status: "refunded".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
