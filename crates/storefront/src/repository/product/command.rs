use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::{CreateProductRequest, CreateVariantRequest, UpdateProductRequest},
    model::{Product, ProductVariant},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

const PRODUCT_COLUMNS: &str = "product_id, name, description, category, base_price, \
     stock_quantity, has_variants, image_url, created_at, updated_at";

const VARIANT_COLUMNS: &str =
    "variant_id, product_id, name, price, stock_quantity, created_at, updated_at";

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (name, description, category, base_price, stock_quantity,
                has_variants, image_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, current_timestamp, current_timestamp)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.category)
        .bind(req.base_price)
        .bind(req.stock_quantity)
        .bind(req.has_variants)
        .bind(&req.image_url)
        .fetch_one(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to create product {}: {:?}", req.name, err);
            RepositoryError::from(err)
        })?;

        info!(
            "✅ Created product ID {} ({})",
            result.product_id, result.name
        );
        Ok(result)
    }

    async fn update_product(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET name = $2,
                description = $3,
                category = $4,
                base_price = $5,
                image_url = $6,
                updated_at = current_timestamp
            WHERE product_id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(req.product_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.category)
        .bind(req.base_price)
        .bind(&req.image_url)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to update product ID {}: {:?}", req.product_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated product ID {}", result.product_id);
        Ok(result)
    }

    async fn restock_product(
        &self,
        product_id: i32,
        qty: i32,
    ) -> Result<Product, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products
            SET stock_quantity = stock_quantity + $1,
                updated_at = current_timestamp
            WHERE product_id = $2
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(qty)
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to restock product {}: {:?}", product_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!(
            "✅ Restocked product ID {} (new stock: {})",
            result.product_id, result.stock_quantity
        );
        Ok(result)
    }

    async fn restock_variant(
        &self,
        product_id: i32,
        variant_id: i32,
        qty: i32,
    ) -> Result<ProductVariant, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductVariant>(&format!(
            r#"
            UPDATE product_variants
            SET stock_quantity = stock_quantity + $1,
                updated_at = current_timestamp
            WHERE variant_id = $2 AND product_id = $3
            RETURNING {VARIANT_COLUMNS}
            "#
        ))
        .bind(qty)
        .bind(variant_id)
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!("❌ Failed to restock variant {}: {:?}", variant_id, err);
            RepositoryError::from(err)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!(
            "✅ Restocked variant ID {} (new stock: {})",
            result.variant_id, result.stock_quantity
        );
        Ok(result)
    }

    async fn create_variant(
        &self,
        product_id: i32,
        req: &CreateVariantRequest,
    ) -> Result<ProductVariant, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ProductVariant>(&format!(
            r#"
            INSERT INTO product_variants (product_id, name, price, stock_quantity,
                created_at, updated_at)
            SELECT $1, $2, $3, $4, current_timestamp, current_timestamp
            WHERE EXISTS (SELECT 1 FROM products WHERE product_id = $1 AND has_variants = TRUE)
            RETURNING {VARIANT_COLUMNS}
            "#
        ))
        .bind(product_id)
        .bind(&req.name)
        .bind(req.price)
        .bind(req.stock_quantity)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|err| {
            error!(
                "❌ Failed to create variant {} for product {}: {:?}",
                req.name, product_id, err
            );
            RepositoryError::from(err)
        })?
        .ok_or_else(|| {
            RepositoryError::Conflict(format!(
                "Product {product_id} does not exist or is not sold per variant"
            ))
        })?;

        info!(
            "✅ Created variant ID {} ({}) for product {}",
            result.variant_id, result.name, product_id
        );
        Ok(result)
    }
}
