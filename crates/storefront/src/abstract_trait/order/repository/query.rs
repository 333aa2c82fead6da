use crate::{domain::requests::order::FindAllOrders, model::Order};
use async_trait::async_trait;
use shared::errors::RepositoryError;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all(&self, req: &FindAllOrders) -> Result<(Vec<Order>, i64), RepositoryError>;
    async fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, RepositoryError>;
}
