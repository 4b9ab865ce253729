use crate::common::{lenient, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseOrderStatus {
    #[default]
    Draft,
    Ordered,
    Received,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl PurchaseOrderStatus {
    pub const ALL: [PurchaseOrderStatus; 4] = [
        PurchaseOrderStatus::Draft,
        PurchaseOrderStatus::Ordered,
        PurchaseOrderStatus::Received,
        PurchaseOrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "draft",
            PurchaseOrderStatus::Ordered => "ordered",
            PurchaseOrderStatus::Received => "received",
            PurchaseOrderStatus::Cancelled => "cancelled",
            PurchaseOrderStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PurchaseOrderStatus::Draft => "Nháp",
            PurchaseOrderStatus::Ordered => "Đã đặt hàng",
            PurchaseOrderStatus::Received => "Đã nhận hàng",
            PurchaseOrderStatus::Cancelled => "Đã hủy",
            PurchaseOrderStatus::Unknown => "Không xác định",
        }
    }

    pub fn from_str_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .unwrap_or(PurchaseOrderStatus::Unknown)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderLine {
    #[serde(alias = "productId")]
    pub product_id: EntityId,
    #[serde(default, alias = "productName")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub quantity: i64,
    #[serde(default, alias = "unitCost", deserialize_with = "lenient::number")]
    pub unit_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: EntityId,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, alias = "supplierName", alias = "supplier", deserialize_with = "lenient::or_default")]
    pub supplier_name: String,
    #[serde(default, alias = "totalAmount", alias = "total", deserialize_with = "lenient::number")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: PurchaseOrderStatus,
    #[serde(default, alias = "expectedDate")]
    pub expected_date: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub items: Vec<PurchaseOrderLine>,
}

impl PurchaseOrder {
    pub fn display_code(&self) -> String {
        self.code.clone().unwrap_or_else(|| format!("PO-{}", self.id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderLineDto {
    pub product_id: EntityId,
    pub quantity: i64,
    pub unit_cost: f64,
}

/// Body of `POST /api/purchase-orders`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePurchaseOrderDto {
    pub supplier_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_date: Option<String>,
    pub items: Vec<PurchaseOrderLineDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Body of `PATCH /api/purchase-orders/{id}/status`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderStatusUpdate {
    pub status: PurchaseOrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_supplier_alias() {
        let po: PurchaseOrder = serde_json::from_str(
            r#"{"id":12,"supplier":"Công ty ABC","status":"ordered","total":1200000}"#,
        )
        .unwrap();
        assert_eq!(po.supplier_name, "Công ty ABC");
        assert_eq!(po.status, PurchaseOrderStatus::Ordered);
        assert_eq!(po.display_code(), "PO-12");
    }
}
