use crate::common::{lenient, EntityId};
use serde::{Deserialize, Serialize};

/// Stock level at or below which a product is flagged in lists
pub const LOW_STOCK_THRESHOLD: i64 = 10;

// ============================================================================
// Aggregate
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default, alias = "quantity", deserialize_with = "lenient::number")]
    pub stock: i64,
    #[serde(default, alias = "categoryId")]
    pub category_id: Option<EntityId>,
    #[serde(default, alias = "categoryName")]
    pub category_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.stock <= LOW_STOCK_THRESHOLD
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /products` and `PUT /products/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub price: f64,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            sku: p.sku.clone(),
            price: p.price,
            stock: p.stock,
            category_id: p.category_id.clone(),
            description: p.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_payload_decodes() {
        let p: Product = serde_json::from_str(r#"{"id":3,"name":"Cà phê","quantity":4}"#).unwrap();
        assert_eq!(p.stock, 4);
        assert_eq!(p.price, 0.0);
        assert!(p.is_low_stock());
    }

    #[test]
    fn test_decimal_strings_decode_inside_a_list() {
        let payload: crate::common::ListPayload<Product> = serde_json::from_str(
            r#"[{"id":1,"name":"Cà phê","price":"25000.00","stock":3},{"id":2,"name":"Trà","price":null,"stock":"12"}]"#,
        )
        .unwrap();
        let items = payload.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].price, 25000.0);
        assert_eq!(items[1].price, 0.0);
        assert_eq!(items[1].stock, 12);
    }

    #[test]
    fn test_dto_skips_empty_optionals() {
        let dto = ProductDto {
            name: "Trà".into(),
            price: 15000.0,
            stock: 20,
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("sku").is_none());
        assert!(json.get("category_id").is_none());
        assert_eq!(json["stock"], 20);
    }
}
