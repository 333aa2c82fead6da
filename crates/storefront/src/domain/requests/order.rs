use crate::model::{OrderSource, OrderStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, IntoParams)]
pub struct FindAllOrders {
    pub search: String,

    #[validate(range(min = 1))]
    pub page: i32,

    #[validate(range(min = 1, max = 100))]
    #[serde(rename = "page_size")]
    pub page_size: i32,
}

/// One cart line as sent by the point-of-sale UI. `price` is the unit price
/// the cashier saw; it becomes the item's `price_at_purchase` snapshot.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct CartItemRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "product_id")]
    pub product_id: i32,

    #[serde(rename = "variant_id")]
    pub variant_id: Option<i32>,

    #[validate(range(min = 1))]
    pub quantity: i32,

    #[validate(range(min = 1))]
    pub price: i64,

    #[validate(length(min = 1))]
    #[serde(rename = "display_name")]
    pub display_name: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct CreatePosOrderRequest {
    #[validate(length(min = 1), nested)]
    pub items: Vec<CartItemRequest>,

    #[validate(range(min = 0))]
    pub subtotal: i64,

    #[validate(range(min = 0))]
    #[serde(rename = "shipping_fee", default)]
    pub shipping_fee: i64,

    #[validate(range(min = 0))]
    #[serde(rename = "discount_amount", default)]
    pub discount_amount: i64,

    #[validate(range(min = 0))]
    #[serde(rename = "total_amount")]
    pub total_amount: i64,

    #[validate(length(min = 1))]
    #[serde(rename = "payment_method")]
    pub payment_method: String,

    #[validate(length(min = 1))]
    #[serde(rename = "recipient_name")]
    pub recipient_name: String,

    #[validate(length(min = 1))]
    #[serde(rename = "recipient_phone")]
    pub recipient_phone: String,

    #[validate(length(min = 1))]
    #[serde(rename = "shipping_address")]
    pub shipping_address: String,

    pub province: Option<String>,

    // walk-in customers have no account
    #[serde(rename = "customer_id")]
    pub customer_id: Option<i32>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[validate(length(min = 1))]
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOrderRecordRequest {
    pub reference: String,
    pub user_id: Option<i32>,
    pub cashier_id: Option<i32>,
    pub source: OrderSource,
    pub status: OrderStatus,
    pub subtotal: i64,
    pub shipping_fee: i64,
    pub discount_amount: i64,
    pub total_amount: i64,
    pub payment_method: String,
    pub recipient_name: String,
    pub recipient_phone: String,
    pub shipping_address: String,
    pub province: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOrderItemRecordRequest {
    pub product_id: i32,
    pub variant_id: Option<i32>,
    pub product_name: String,
    pub quantity: i32,
    pub price_at_purchase: i64,
}
