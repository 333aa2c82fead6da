use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::product::FindAllProducts,
        response::{
            api::{ApiResponse, ApiResponsePagination},
            pagination::Pagination,
            product::{ProductDetailResponse, ProductResponse, ProductVariantResponse},
        },
    },
};
use async_trait::async_trait;
use chrono::Duration;
use prometheus_client::registry::Registry;
use shared::{
    cache::CacheStore,
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status as StatusUtils},
};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Metrics,
    cache_store: Arc<CacheStore>,
}

impl ProductQueryService {
    pub fn new(
        query: DynProductQueryRepository,
        registry: &mut Registry,
        cache_store: Arc<CacheStore>,
    ) -> Self {
        let metrics = Metrics::new();

        registry.register(
            "product_query_service_request_counter",
            "Total number of requests to the ProductQueryService",
            metrics.request_counter.clone(),
        );
        registry.register(
            "product_query_service_request_duration",
            "Histogram of request durations for the ProductQueryService",
            metrics.request_duration.clone(),
        );

        Self {
            query,
            metrics,
            cache_store,
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🔍 Finding all products | Page: {}, Size: {}, Search: '{}'",
            req.page, req.page_size, req.search
        );

        let start = Instant::now();

        let cache_key = format!(
            "product:find_all:page:{}:size:{}:search:{}",
            req.page, req.page_size, req.search
        );

        if let Some(cache) = self
            .cache_store
            .get_from_cache::<ApiResponsePagination<Vec<ProductResponse>>>(&cache_key)
            .await
        {
            info!("✅ Found cached products (total: {})", cache.data.len());
            self.metrics.record(
                Method::Get,
                StatusUtils::Success,
                start.elapsed().as_secs_f64(),
            );
            return Ok(cache);
        }

        let (products, total) = match self.query.find_all(req).await {
            Ok(res) => res,
            Err(e) => {
                error!("❌ Failed to find products: {e:?}");
                self.metrics.record(
                    Method::Get,
                    StatusUtils::Error,
                    start.elapsed().as_secs_f64(),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<ProductResponse> =
            products.into_iter().map(ProductResponse::from).collect();

        let response = ApiResponsePagination::success(
            "Products retrieved successfully",
            data,
            Pagination::new(req.page, req.page_size, total),
        );

        self.cache_store
            .set_to_cache(&cache_key, &response, Duration::minutes(5))
            .await;

        self.metrics.record(
            Method::Get,
            StatusUtils::Success,
            start.elapsed().as_secs_f64(),
        );

        info!("✅ Found {} products (total: {total})", response.data.len());

        Ok(response)
    }

    async fn find_by_id(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductDetailResponse>, ServiceError> {
        info!("🔍 Finding product by ID: {product_id}");

        let start = Instant::now();

        let product = match self.query.find_by_id(product_id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                self.metrics.record(
                    Method::Get,
                    StatusUtils::Error,
                    start.elapsed().as_secs_f64(),
                );
                return Err(ServiceError::Repo(RepositoryError::NotFound));
            }
            Err(e) => {
                error!("❌ Failed to fetch product {product_id}: {e:?}");
                self.metrics.record(
                    Method::Get,
                    StatusUtils::Error,
                    start.elapsed().as_secs_f64(),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        let variants = if product.has_variants {
            match self.query.find_variants(product_id).await {
                Ok(variants) => variants,
                Err(e) => {
                    error!("❌ Failed to fetch variants for {product_id}: {e:?}");
                    self.metrics.record(
                        Method::Get,
                        StatusUtils::Error,
                        start.elapsed().as_secs_f64(),
                    );
                    return Err(ServiceError::Repo(e));
                }
            }
        } else {
            Vec::new()
        };

        self.metrics.record(
            Method::Get,
            StatusUtils::Success,
            start.elapsed().as_secs_f64(),
        );

        let detail = ProductDetailResponse {
            product: ProductResponse::from(product),
            variants: variants
                .into_iter()
                .map(ProductVariantResponse::from)
                .collect(),
        };

        Ok(ApiResponse::success("Product retrieved successfully", detail))
    }
}
