use crate::{
    domain::requests::product::FindAllProducts,
    model::{Product, ProductVariant},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<Product>, i64), RepositoryError>;

    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, RepositoryError>;

    async fn find_variants(&self, product_id: i32)
    -> Result<Vec<ProductVariant>, RepositoryError>;
}
