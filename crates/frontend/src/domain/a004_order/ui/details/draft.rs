//! Order being composed in the create form.

use crate::shared::form::{optional, parse_positive};
use contracts::common::EntityId;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a004_order::aggregate::{CreateOrderDto, OrderLineDto};

pub const PAYMENT_METHODS: [(&str, &str); 3] = [
    ("cash", "Tiền mặt"),
    ("transfer", "Chuyển khoản"),
    ("card", "Thẻ"),
];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftLine {
    pub product_id: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer_id: String,
    pub payment_method: String,
    pub note: String,
    pub lines: Vec<DraftLine>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            payment_method: PAYMENT_METHODS[0].0.to_string(),
            note: String::new(),
            lines: vec![DraftLine {
                product_id: String::new(),
                quantity: "1".to_string(),
            }],
        }
    }
}

impl OrderDraft {
    /// Resolve lines against the product list. Prices come from the product;
    /// repeated products are merged.
    pub fn to_dto(&self, products: &[Product]) -> Result<CreateOrderDto, String> {
        let mut items: Vec<OrderLineDto> = Vec::new();

        for line in &self.lines {
            let Some(id) = EntityId::parse(&line.product_id) else {
                continue;
            };
            let product = products
                .iter()
                .find(|p| p.id == id)
                .ok_or_else(|| "Sản phẩm không còn tồn tại.".to_string())?;
            let quantity = parse_positive("Số lượng", &line.quantity)?;

            match items.iter_mut().find(|i| i.product_id == id) {
                Some(existing) => {
                    existing.quantity = existing
                        .quantity
                        .checked_add(quantity)
                        .ok_or_else(|| format!("Số lượng \"{}\" quá lớn.", product.name))?;
                }
                None => items.push(OrderLineDto {
                    product_id: id,
                    quantity,
                    price: product.price,
                }),
            }
        }

        if items.is_empty() {
            return Err("Đơn hàng cần ít nhất một sản phẩm.".to_string());
        }
        for item in &items {
            if let Some(p) = products.iter().find(|p| p.id == item.product_id) {
                if item.quantity > p.stock {
                    return Err(format!(
                        "\"{}\" chỉ còn {} trong kho.",
                        p.name, p.stock
                    ));
                }
            }
        }

        Ok(CreateOrderDto {
            customer_id: EntityId::parse(&self.customer_id),
            items,
            payment_method: optional(&self.payment_method),
            note: optional(&self.note),
        })
    }

    /// Running total for the form footer; unresolvable lines count as zero
    pub fn preview_total(&self, products: &[Product]) -> f64 {
        self.lines
            .iter()
            .filter_map(|line| {
                let id = EntityId::parse(&line.product_id)?;
                let product = products.iter().find(|p| p.id == id)?;
                let quantity = line.quantity.trim().parse::<i64>().ok()?.max(0);
                Some(product.price * quantity as f64)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        serde_json::from_str(
            r#"[{"id":1,"name":"Cà phê","price":25000,"stock":10},
                {"id":2,"name":"Trà","price":15000,"stock":2}]"#,
        )
        .unwrap()
    }

    fn line(id: &str, qty: &str) -> DraftLine {
        DraftLine {
            product_id: id.into(),
            quantity: qty.into(),
        }
    }

    #[test]
    fn test_walk_in_order_with_merged_lines() {
        let draft = OrderDraft {
            lines: vec![line("1", "2"), line("", "1"), line("1", "1")],
            ..Default::default()
        };
        let dto = draft.to_dto(&products()).unwrap();
        assert_eq!(dto.customer_id, None);
        assert_eq!(dto.items.len(), 1);
        assert_eq!(dto.items[0].quantity, 3);
        assert_eq!(dto.total(), 75000.0);
        assert_eq!(dto.payment_method.as_deref(), Some("cash"));
    }

    #[test]
    fn test_empty_order_rejected() {
        let draft = OrderDraft::default();
        assert!(draft.to_dto(&products()).is_err());
    }

    #[test]
    fn test_quantity_over_stock_rejected() {
        let draft = OrderDraft {
            lines: vec![line("2", "3")],
            ..Default::default()
        };
        assert_eq!(draft.to_dto(&products()).unwrap_err(), "\"Trà\" chỉ còn 2 trong kho.");
    }

    #[test]
    fn test_merged_quantity_overflow_rejected() {
        let draft = OrderDraft {
            lines: vec![line("1", &i64::MAX.to_string()), line("1", "2")],
            ..Default::default()
        };
        assert_eq!(draft.to_dto(&products()).unwrap_err(), "Số lượng \"Cà phê\" quá lớn.");
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let draft = OrderDraft {
            lines: vec![line("1", "0")],
            ..Default::default()
        };
        assert!(draft.to_dto(&products()).is_err());
    }

    #[test]
    fn test_preview_total_ignores_incomplete_lines() {
        let draft = OrderDraft {
            lines: vec![line("1", "2"), line("2", "x"), line("", "4")],
            ..Default::default()
        };
        assert_eq!(draft.preview_total(&products()), 50000.0);
    }
}
