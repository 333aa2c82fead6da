use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_item_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub variant_id: Option<i32>,
    pub product_name: String,
    pub quantity: i32,
    // snapshot of the cart price, never re-read from the product
    pub price_at_purchase: i64,
    pub created_at: Option<NaiveDateTime>,
}
