use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{
            CreateProductRequest, CreateVariantRequest, RestockProductRequest,
            UpdateProductRequest,
        },
        response::{
            api::ApiResponse,
            product::{ProductResponse, ProductVariantResponse, RestockResponse},
        },
    },
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
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "product_command_service_request_counter",
            "Total number of requests to the ProductCommandService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "product_command_service_request_duration",
            "Histogram of request durations for the ProductCommandService",
            metrics.request_duration.clone(),
        );

        Self { command, metrics }
    }

    fn record(&self, method: Method, is_success: bool, start: Instant) {
        let status = if is_success {
            StatusUtils::Success
        } else {
            StatusUtils::Error
        };
        self.metrics
            .record(method, status, start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Creating product '{}'", req.name);

        let start = Instant::now();

        let product = match self.command.create_product(req).await {
            Ok(product) => product,
            Err(e) => {
                error!("❌ Failed to create product '{}': {e:?}", req.name);
                self.record(Method::Post, false, start);
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Post, true, start);

        Ok(ApiResponse::success(
            "Product created successfully",
            ProductResponse::from(product),
        ))
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("✏️ Updating product ID={}", req.product_id);

        let start = Instant::now();

        let product = match self.command.update_product(req).await {
            Ok(product) => product,
            Err(e) => {
                error!("❌ Failed to update product {}: {e:?}", req.product_id);
                self.record(Method::Put, false, start);
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Put, true, start);

        Ok(ApiResponse::success(
            "Product updated successfully",
            ProductResponse::from(product),
        ))
    }

    async fn restock(
        &self,
        product_id: i32,
        req: &RestockProductRequest,
    ) -> Result<ApiResponse<RestockResponse>, ServiceError> {
        info!(
            "📦 Restocking product ID={} (variant: {:?}, qty: {})",
            product_id, req.variant_id, req.quantity
        );

        let start = Instant::now();

        let result = match req.variant_id {
            Some(variant_id) => self
                .command
                .restock_variant(product_id, variant_id, req.quantity)
                .await
                .map(|variant| RestockResponse {
                    product_id: variant.product_id,
                    variant_id: Some(variant.variant_id),
                    stock_quantity: variant.stock_quantity,
                }),
            None => self
                .command
                .restock_product(product_id, req.quantity)
                .await
                .map(|product| RestockResponse {
                    product_id: product.product_id,
                    variant_id: None,
                    stock_quantity: product.stock_quantity,
                }),
        };

        let restocked = match result {
            Ok(restocked) => restocked,
            Err(e) => {
                error!("❌ Failed to restock product {product_id}: {e:?}");
                self.record(Method::Put, false, start);
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Put, true, start);

        Ok(ApiResponse::success("Stock updated successfully", restocked))
    }

    async fn create_variant(
        &self,
        product_id: i32,
        req: &CreateVariantRequest,
    ) -> Result<ApiResponse<ProductVariantResponse>, ServiceError> {
        info!(
            "🏗️ Creating variant '{}' for product ID={}",
            req.name, product_id
        );

        let start = Instant::now();

        let variant = match self.command.create_variant(product_id, req).await {
            Ok(variant) => variant,
            Err(e) => {
                error!(
                    "❌ Failed to create variant '{}' for product {product_id}: {e:?}",
                    req.name
                );
                self.record(Method::Post, false, start);
                return Err(ServiceError::Repo(e));
            }
        };

        self.record(Method::Post, true, start);

        Ok(ApiResponse::success(
            "Variant created successfully",
            ProductVariantResponse::from(variant),
        ))
    }
}
