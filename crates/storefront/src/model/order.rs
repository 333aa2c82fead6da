use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderSource {
    Marketplace,
    Pos,
}

impl fmt::Display for OrderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrderSource::Marketplace => "marketplace",
            OrderSource::Pos => "pos",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Packed,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Packed => "packed",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Returned => "returned",
        }
    }

    /// Fulfilment walks pending → paid → packed → shipped → delivered.
    /// Cancellation is possible until the parcel leaves the warehouse,
    /// returns only once it has shipped. Terminal states have no exits.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Paid)
                | (Pending, Cancelled)
                | (Paid, Packed)
                | (Paid, Cancelled)
                | (Packed, Shipped)
                | (Packed, Cancelled)
                | (Shipped, Delivered)
                | (Shipped, Returned)
                | (Delivered, Returned)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "paid" => Ok(OrderStatus::Paid),
            "packed" => Ok(OrderStatus::Packed),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            "returned" => Ok(OrderStatus::Returned),
            other => Err(format!("Unknown order status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
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
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fulfilment_path_is_accepted() {
        use OrderStatus::*;

        let path = [Pending, Paid, Packed, Shipped, Delivered];
        for pair in path.windows(2) {
            assert!(
                pair[0].can_transition_to(pair[1]),
                "{} -> {} should be allowed",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn cancellation_only_before_shipping() {
        use OrderStatus::*;

        assert!(Pending.can_transition_to(Cancelled));
        assert!(Paid.can_transition_to(Cancelled));
        assert!(Packed.can_transition_to(Cancelled));
        assert!(!Shipped.can_transition_to(Cancelled));
        assert!(!Delivered.can_transition_to(Cancelled));
    }

    #[test]
    fn returns_only_after_shipping() {
        use OrderStatus::*;

        assert!(Shipped.can_transition_to(Returned));
        assert!(Delivered.can_transition_to(Returned));
        assert!(!Paid.can_transition_to(Returned));
        assert!(!Pending.can_transition_to(Returned));
    }

    #[test]
    fn terminal_states_have_no_exits() {
        use OrderStatus::*;

        let all = [
            Pending, Paid, Packed, Shipped, Delivered, Cancelled, Returned,
        ];
        for next in all {
            assert!(!Cancelled.can_transition_to(next));
            assert!(!Returned.can_transition_to(next));
        }
    }

    #[test]
    fn skipping_states_is_rejected() {
        use OrderStatus::*;

        assert!(!Pending.can_transition_to(Shipped));
        assert!(!Paid.can_transition_to(Delivered));
        assert!(!Packed.can_transition_to(Delivered));
    }

    #[test]
    fn status_round_trips_through_strings() {
        use OrderStatus::*;

        for status in [Pending, Paid, Packed, Shipped, Delivered, Cancelled, Returned] {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert!("refunded".parse::<OrderStatus>().is_err());
    }
}
