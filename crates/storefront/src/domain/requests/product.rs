use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, IntoParams)]
pub struct FindAllProducts {
    pub search: String,

    #[validate(range(min = 1))]
    pub page: i32,

    #[validate(range(min = 1, max = 100))]
    #[serde(rename = "page_size")]
    pub page_size: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1))]
    pub name: String,

    pub description: Option<String>,

    pub category: Option<String>,

    #[validate(range(min = 1))]
    #[serde(rename = "base_price")]
    pub base_price: i64,

    #[validate(range(min = 0))]
    #[serde(rename = "stock_quantity", default)]
    pub stock_quantity: i32,

    #[serde(rename = "has_variants", default)]
    pub has_variants: bool,

    #[serde(rename = "image_url")]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(skip_deserializing)]
    pub product_id: i32,

    #[validate(length(min = 1))]
    pub name: String,

    pub description: Option<String>,

    pub category: Option<String>,

    #[validate(range(min = 1))]
    #[serde(rename = "base_price")]
    pub base_price: i64,

    #[serde(rename = "image_url")]
    pub image_url: Option<String>,
}

/// Inventory top-up. With a `variant_id` the variant row is restocked,
/// otherwise the product row itself.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RestockProductRequest {
    #[validate(range(min = 1))]
    pub quantity: i32,

    #[serde(rename = "variant_id")]
    pub variant_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateVariantRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = 1))]
    pub price: i64,

    #[validate(range(min = 0))]
    #[serde(rename = "stock_quantity", default)]
    pub stock_quantity: i32,
}
