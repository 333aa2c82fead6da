use crate::domain::{
    requests::product::{
        CreateProductRequest, CreateVariantRequest, RestockProductRequest, UpdateProductRequest,
    },
    response::{
        api::ApiResponse,
        product::{ProductResponse, ProductVariantResponse, RestockResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;

    async fn restock(
        &self,
        product_id: i32,
        req: &RestockProductRequest,
    ) -> Result<ApiResponse<RestockResponse>, ServiceError>;

    async fn create_variant(
        &self,
        product_id: i32,
        req: &CreateVariantRequest,
    ) -> Result<ApiResponse<ProductVariantResponse>, ServiceError>;
}
