//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order status as delivered by the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Completed,
}

impl OrderStatus {
    /// Statuses counted as realized revenue.
    pub fn is_terminal_success(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Delivered)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_name: String,
    /// Unit price in currency unit
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub quantity: i64,
}

impl OrderItem {
    /// Line revenue (unit price times quantity).
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Order entity
///
/// `total_amount` and `items` default when the backend omits them; a missing
/// amount aggregates and sorts as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub user_name: Option<String>,
    pub user_phone: Option<String>,
    pub address: Option<String>,
    pub status: OrderStatus,
    /// Total amount in currency unit
    #[serde(default)]
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_case_is_lowercase() {
        let status: OrderStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(status, OrderStatus::Delivered);
        assert_eq!(serde_json::to_string(&OrderStatus::Pending).unwrap(), "\"pending\"");
    }

    #[test]
    fn terminal_success_set() {
        assert!(OrderStatus::Completed.is_terminal_success());
        assert!(OrderStatus::Delivered.is_terminal_success());
        assert!(!OrderStatus::Pending.is_terminal_success());
        assert!(!OrderStatus::Shipped.is_terminal_success());
        assert!(!OrderStatus::Cancelled.is_terminal_success());
    }

    #[test]
    fn missing_amount_defaults_to_zero() {
        let order: Order = serde_json::from_value(serde_json::json!({
            "id": 1,
            "user_id": 7,
            "status": "pending",
            "created_at": "2024-01-01T08:00:00Z"
        }))
        .unwrap();
        assert_eq!(order.total_amount, 0.0);
        assert!(order.items.is_empty());
    }
}
