use crate::domain::{
    requests::order::FindAllOrders,
    response::{
        api::{ApiResponse, ApiResponsePagination},
        order::OrderResponse,
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError>;

    async fn find_by_id(&self, order_id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
