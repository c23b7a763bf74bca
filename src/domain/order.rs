use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of an order.
///
/// The lifecycle is strictly forward-moving (pending -> processing -> shipped
/// -> delivered), except for cancellation, which is terminal from any
/// non-delivered state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn is_cancelled(self) -> bool {
        matches!(self, OrderStatus::Cancelled)
    }

    /// Pending, processing, and shipped orders count as in progress.
    pub fn is_in_progress(self) -> bool {
        matches!(
            self,
            OrderStatus::Pending | OrderStatus::Processing | OrderStatus::Shipped
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", label)
    }
}

/// A single product/quantity/price entry within an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: f64,
}

impl OrderItem {
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A customer purchase record.
///
/// `total` is stored redundantly and must equal the rounded sum of line-item
/// subtotals. The ship/delivery timestamps are absent whenever the status is
/// pending, processing, or cancelled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
    pub shipping_address: String,
    pub order_date: DateTime<Utc>,
    pub shipped_date: Option<DateTime<Utc>>,
    pub delivered_date: Option<DateTime<Utc>>,
}

/// Payload for creating a new order. The total, status, and timestamps are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub shipping_address: String,
}
