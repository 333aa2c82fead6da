use crate::{
    domain::requests::order::{CreateOrderItemRecordRequest, CreateOrderRecordRequest},
    model::{Order, OrderItem, OrderStatus},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Writes the order header, its items and the stock decrements as one
    /// unit: either everything persists or nothing does. Insufficient stock
    /// on any line surfaces as `RepositoryError::InsufficientStock` naming
    /// the line, with every other write rolled back.
    async fn create_checkout(
        &self,
        order: &CreateOrderRecordRequest,
        items: &[CreateOrderItemRecordRequest],
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError>;

    /// Moves `status` from `from` to `to`, guarded by the current value so a
    /// concurrent change loses cleanly instead of being overwritten.
    async fn update_status(
        &self,
        order_id: i32,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<Order, RepositoryError>;
}
