use crate::model::{Product, ProductVariant};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "base_price")]
    pub base_price: i64,
    #[serde(rename = "stock_quantity")]
    pub stock_quantity: i32,
    #[serde(rename = "has_variants")]
    pub has_variants: bool,
    #[serde(rename = "image_url")]
    pub image_url: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            description: value.description,
            category: value.category,
            base_price: value.base_price,
            stock_quantity: value.stock_quantity,
            has_variants: value.has_variants,
            image_url: value.image_url,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductVariantResponse {
    pub id: i32,
    #[serde(rename = "product_id")]
    pub product_id: i32,
    pub name: String,
    pub price: i64,
    #[serde(rename = "stock_quantity")]
    pub stock_quantity: i32,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

impl From<ProductVariant> for ProductVariantResponse {
    fn from(value: ProductVariant) -> Self {
        ProductVariantResponse {
            id: value.variant_id,
            product_id: value.product_id,
            name: value.name,
            price: value.price,
            stock_quantity: value.stock_quantity,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

/// Result of a stock top-up, naming the row that was actually adjusted.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct RestockResponse {
    #[serde(rename = "product_id")]
    pub product_id: i32,
    #[serde(rename = "variant_id")]
    pub variant_id: Option<i32>,
    #[serde(rename = "stock_quantity")]
    pub stock_quantity: i32,
}

/// Product with its variants, as served by the detail endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductDetailResponse {
    pub product: ProductResponse,
    pub variants: Vec<ProductVariantResponse>,
}
