use crate::domain::{
    requests::product::FindAllProducts,
    response::{
        api::{ApiResponse, ApiResponsePagination},
        product::{ProductDetailResponse, ProductResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError>;

    async fn find_by_id(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductDetailResponse>, ServiceError>;
}
