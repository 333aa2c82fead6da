use crate::domain::response::order_item::OrderItemResponse;
use crate::model::Order;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub reference: String,
    #[serde(rename = "user_id")]
    pub user_id: Option<i32>,
    #[serde(rename = "cashier_id")]
    pub cashier_id: Option<i32>,
    pub source: String,
    pub status: String,
    pub subtotal: i64,
    #[serde(rename = "shipping_fee")]
    pub shipping_fee: i64,
    #[serde(rename = "discount_amount")]
    pub discount_amount: i64,
    #[serde(rename = "total_amount")]
    pub total_amount: i64,
    #[serde(rename = "payment_method")]
    pub payment_method: String,
    #[serde(rename = "recipient_name")]
    pub recipient_name: String,
    #[serde(rename = "recipient_phone")]
    pub recipient_phone: String,
    #[serde(rename = "shipping_address")]
    pub shipping_address: String,
    pub province: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.order_id,
            reference: value.reference,
            user_id: value.user_id,
            cashier_id: value.cashier_id,
            source: value.source.to_string(),
            status: value.status.to_string(),
            subtotal: value.subtotal,
            shipping_fee: value.shipping_fee,
            discount_amount: value.discount_amount,
            total_amount: value.total_amount,
            payment_method: value.payment_method,
            recipient_name: value.recipient_name,
            recipient_phone: value.recipient_phone,
            shipping_address: value.shipping_address,
            province: value.province,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

/// Created order plus its lines, returned by the point-of-sale checkout.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CheckoutResponse {
    pub order: OrderResponse,
    pub items: Vec<OrderItemResponse>,
}
