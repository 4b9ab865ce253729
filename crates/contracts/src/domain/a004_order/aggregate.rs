use crate::common::{lenient, EntityId};
use serde::{Deserialize, Serialize};

/// Shown in place of the customer for walk-in sales
pub const WALK_IN_CUSTOMER: &str = "Khách vãng lai";

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Shipping,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Statuses offered in filters and status pickers
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipping,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Shipping => "shipping",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Chờ xử lý",
            OrderStatus::Confirmed => "Đã xác nhận",
            OrderStatus::Shipping => "Đang giao",
            OrderStatus::Completed => "Hoàn thành",
            OrderStatus::Cancelled => "Đã hủy",
            OrderStatus::Unknown => "Không xác định",
        }
    }

    pub fn from_str_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or(OrderStatus::Unknown)
    }

    /// Completed and cancelled orders no longer change status
    pub fn is_final(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(alias = "productId")]
    pub product_id: EntityId,
    #[serde(default, alias = "productName")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub quantity: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    #[serde(default, alias = "code", alias = "orderNumber")]
    pub order_number: Option<String>,
    #[serde(default, alias = "customerId")]
    pub customer_id: Option<EntityId>,
    #[serde(default, alias = "customerName")]
    pub customer_name: Option<String>,
    #[serde(default, alias = "total", alias = "totalAmount", deserialize_with = "lenient::number")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: OrderStatus,
    #[serde(default, alias = "paymentMethod")]
    pub payment_method: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn customer_display(&self) -> &str {
        self.customer_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(WALK_IN_CUSTOMER)
    }

    pub fn display_code(&self) -> String {
        self.order_number
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineDto {
    pub product_id: EntityId,
    pub quantity: i64,
    pub price: f64,
}

/// Body of `POST /api/orders`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<EntityId>,
    pub items: Vec<OrderLineDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CreateOrderDto {
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|line| line.price * line.quantity as f64)
            .sum()
    }
}

/// Body of `PATCH /api/orders/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_in_fallback() {
        let order: Order = serde_json::from_str(r#"{"id":10,"total":50000,"status":"pending"}"#).unwrap();
        assert_eq!(order.customer_display(), WALK_IN_CUSTOMER);
        assert_eq!(order.display_code(), "#10");
        assert_eq!(order.total_amount, 50000.0);
    }

    #[test]
    fn test_named_customer() {
        let order: Order = serde_json::from_str(
            r#"{"id":"ORD1","orderNumber":"DH-001","customerName":"Nguyễn Văn A","status":"shipping"}"#,
        )
        .unwrap();
        assert_eq!(order.customer_display(), "Nguyễn Văn A");
        assert_eq!(order.display_code(), "DH-001");
        assert_eq!(order.status, OrderStatus::Shipping);
    }

    #[test]
    fn test_null_amount_keeps_the_rest_of_the_page() {
        let payload: crate::common::ListPayload<Order> = serde_json::from_str(
            r#"[{"id":1,"total":50000,"status":"pending"},{"id":2,"total_amount":null,"status":null,"items":null}]"#,
        )
        .unwrap();
        let orders = payload.into_items();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[1].total_amount, 0.0);
        assert_eq!(orders[1].status, OrderStatus::Pending);
        assert!(orders[1].items.is_empty());
    }

    #[test]
    fn test_unknown_status_does_not_fail() {
        let order: Order = serde_json::from_str(r#"{"id":1,"status":"refunded"}"#).unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);
    }

    #[test]
    fn test_status_roundtrip_through_str() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_str_value(status.as_str()), status);
        }
        assert_eq!(OrderStatus::from_str_value("nope"), OrderStatus::Unknown);
        assert!(OrderStatus::Cancelled.is_final());
        assert!(!OrderStatus::Pending.is_final());
    }

    #[test]
    fn test_status_update_body() {
        let body = serde_json::to_string(&OrderStatusUpdate {
            status: OrderStatus::Completed,
        })
        .unwrap();
        assert_eq!(body, r#"{"status":"completed"}"#);
    }

    #[test]
    fn test_create_order_total() {
        let dto = CreateOrderDto {
            items: vec![
                OrderLineDto { product_id: EntityId::Int(1), quantity: 2, price: 10000.0 },
                OrderLineDto { product_id: EntityId::Int(2), quantity: 1, price: 5000.0 },
            ],
            ..Default::default()
        };
        assert_eq!(dto.total(), 25000.0);
    }
}
