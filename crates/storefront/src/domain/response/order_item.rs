use crate::model::OrderItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub id: i32,
    #[serde(rename = "order_id")]
    pub order_id: i32,
    #[serde(rename = "product_id")]
    pub product_id: i32,
    #[serde(rename = "variant_id")]
    pub variant_id: Option<i32>,
    #[serde(rename = "product_name")]
    pub product_name: String,
    pub quantity: i32,
    #[serde(rename = "price_at_purchase")]
    pub price_at_purchase: i64,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            id: value.order_item_id,
            order_id: value.order_id,
            product_id: value.product_id,
            variant_id: value.variant_id,
            product_name: value.product_name,
            quantity: value.quantity,
            price_at_purchase: value.price_at_purchase,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
