use crate::common::{lenient, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    #[default]
    Import,
    Export,
    Adjustment,
    #[serde(other)]
    Unknown,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 3] = [
        TransactionKind::Import,
        TransactionKind::Export,
        TransactionKind::Adjustment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Import => "import",
            TransactionKind::Export => "export",
            TransactionKind::Adjustment => "adjustment",
            TransactionKind::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Import => "Nhập kho",
            TransactionKind::Export => "Xuất kho",
            TransactionKind::Adjustment => "Điều chỉnh",
            TransactionKind::Unknown => "Khác",
        }
    }

    pub fn from_str_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == value)
            .unwrap_or(TransactionKind::Unknown)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryTransaction {
    pub id: EntityId,
    #[serde(alias = "productId")]
    pub product_id: EntityId,
    #[serde(default, alias = "productName")]
    pub product_name: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient::or_default")]
    pub kind: TransactionKind,
    #[serde(default, deserialize_with = "lenient::number")]
    pub quantity: i64,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default, alias = "createdBy")]
    pub created_by: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

/// Body of `POST /inventory/transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInventoryTransactionDto {
    pub product_id: EntityId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub quantity: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_is_serialized_as_type() {
        let dto = CreateInventoryTransactionDto {
            product_id: EntityId::Int(4),
            kind: TransactionKind::Export,
            quantity: 3,
            note: None,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["type"], "export");
        assert!(json.get("note").is_none());
    }

    #[test]
    fn test_unknown_kind() {
        let tx: InventoryTransaction =
            serde_json::from_str(r#"{"id":1,"productId":2,"type":"transfer","quantity":5}"#).unwrap();
        assert_eq!(tx.kind, TransactionKind::Unknown);
        assert_eq!(tx.quantity, 5);
    }
}
