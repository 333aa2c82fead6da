use crate::domain::{
    requests::order::{CreatePosOrderRequest, UpdateOrderStatusRequest},
    response::{
        api::ApiResponse,
        order::{CheckoutResponse, OrderResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;

#[async_trait]
pub trait OrderCommandServiceTrait {
    async fn create_pos_order(
        &self,
        cashier_id: i32,
        req: &CreatePosOrderRequest,
    ) -> Result<ApiResponse<CheckoutResponse>, ServiceError>;

    async fn update_order_status(
        &self,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}
