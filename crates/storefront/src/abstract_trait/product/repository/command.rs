use crate::{
    domain::requests::product::{CreateProductRequest, CreateVariantRequest, UpdateProductRequest},
    model::{Product, ProductVariant},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<Product, RepositoryError>;

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError>;

    /// Atomic `stock_quantity = stock_quantity + qty` on the product row.
    async fn restock_product(&self, product_id: i32, qty: i32)
    -> Result<Product, RepositoryError>;

    /// Atomic `stock_quantity = stock_quantity + qty` on the variant row.
    async fn restock_variant(
        &self,
        product_id: i32,
        variant_id: i32,
        qty: i32,
    ) -> Result<ProductVariant, RepositoryError>;

    async fn create_variant(
        &self,
        product_id: i32,
        req: &CreateVariantRequest,
    ) -> Result<ProductVariant, RepositoryError>;
}
