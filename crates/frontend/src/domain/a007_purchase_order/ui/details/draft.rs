//! Purchase order being composed in the create form.

use crate::shared::form::{optional, parse_amount, parse_positive, required};
use contracts::common::EntityId;
use contracts::domain::a007_purchase_order::aggregate::{CreatePurchaseOrderDto, PurchaseOrderLineDto};

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseDraftLine {
    pub product_id: String,
    pub quantity: String,
    pub unit_cost: String,
}

impl Default for PurchaseDraftLine {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            quantity: "1".to_string(),
            unit_cost: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseDraft {
    pub supplier_name: String,
    pub expected_date: String,
    pub note: String,
    pub lines: Vec<PurchaseDraftLine>,
}

impl Default for PurchaseDraft {
    fn default() -> Self {
        Self {
            supplier_name: String::new(),
            expected_date: String::new(),
            note: String::new(),
            lines: vec![PurchaseDraftLine::default()],
        }
    }
}

impl PurchaseDraft {
    /// Lines without a product are skipped. Unlike sales orders, the same
    /// product may appear twice when bought at different costs.
    pub fn to_dto(&self) -> Result<CreatePurchaseOrderDto, String> {
        let supplier_name = required("Nhà cung cấp", &self.supplier_name)?;

        let mut items = Vec::new();
        for line in &self.lines {
            let Some(product_id) = EntityId::parse(&line.product_id) else {
                continue;
            };
            items.push(PurchaseOrderLineDto {
                product_id,
                quantity: parse_positive("Số lượng", &line.quantity)?,
                unit_cost: parse_amount("Giá nhập", &line.unit_cost)?,
            });
        }
        if items.is_empty() {
            return Err("Phiếu nhập cần ít nhất một sản phẩm.".to_string());
        }

        Ok(CreatePurchaseOrderDto {
            supplier_name,
            expected_date: optional(&self.expected_date),
            items,
            note: optional(&self.note),
        })
    }

    pub fn preview_total(&self) -> f64 {
        self.lines
            .iter()
            .filter(|l| !l.product_id.trim().is_empty())
            .filter_map(|l| {
                let quantity = l.quantity.trim().parse::<i64>().ok()?.max(0);
                let cost = parse_amount("", &l.unit_cost).ok()?;
                Some(quantity as f64 * cost)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, qty: &str, cost: &str) -> PurchaseDraftLine {
        PurchaseDraftLine {
            product_id: id.into(),
            quantity: qty.into(),
            unit_cost: cost.into(),
        }
    }

    #[test]
    fn test_to_dto() {
        let draft = PurchaseDraft {
            supplier_name: " Công ty ABC ".into(),
            expected_date: "2024-06-01".into(),
            note: String::new(),
            lines: vec![line("3", "10", "12000"), line("", "1", ""), line("3", "5", "11000")],
        };
        let dto = draft.to_dto().unwrap();
        assert_eq!(dto.supplier_name, "Công ty ABC");
        assert_eq!(dto.expected_date.as_deref(), Some("2024-06-01"));
        assert_eq!(dto.items.len(), 2);
        assert_eq!(dto.items[0].unit_cost, 12000.0);
        assert_eq!(dto.note, None);
    }

    #[test]
    fn test_supplier_and_lines_required() {
        let mut draft = PurchaseDraft {
            lines: vec![line("1", "1", "100")],
            ..Default::default()
        };
        assert!(draft.to_dto().is_err());

        draft.supplier_name = "NCC".into();
        draft.lines = vec![line("", "1", "")];
        assert!(draft.to_dto().is_err());
    }

    #[test]
    fn test_invalid_line_values() {
        let mut draft = PurchaseDraft {
            supplier_name: "NCC".into(),
            lines: vec![line("1", "0", "100")],
            ..Default::default()
        };
        assert!(draft.to_dto().is_err());
        draft.lines = vec![line("1", "2", "-5")];
        assert!(draft.to_dto().is_err());
    }

    #[test]
    fn test_preview_total() {
        let draft = PurchaseDraft {
            lines: vec![line("1", "2", "1500"), line("2", "3", "abc"), line("", "9", "9")],
            ..Default::default()
        };
        assert_eq!(draft.preview_total(), 3000.0);
    }
}
