use crate::shared::form::{optional, parse_amount, parse_quantity, required};
use contracts::common::EntityId;
use contracts::domain::a001_product::aggregate::{Product, ProductDto};

/// Raw text of the product form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub sku: String,
    pub price: String,
    pub stock: String,
    pub category_id: String,
    pub description: String,
}

impl ProductForm {
    pub fn from_product(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            sku: p.sku.clone().unwrap_or_default(),
            price: p.price.to_string(),
            stock: p.stock.to_string(),
            category_id: p
                .category_id
                .as_ref()
                .map(EntityId::as_string)
                .unwrap_or_default(),
            description: p.description.clone().unwrap_or_default(),
        }
    }

    pub fn to_dto(&self) -> Result<ProductDto, String> {
        Ok(ProductDto {
            name: required("Tên sản phẩm", &self.name)?,
            sku: optional(&self.sku),
            price: parse_amount("Giá bán", &self.price)?,
            stock: parse_quantity("Tồn kho", &self.stock, false)?,
            category_id: EntityId::parse(&self.category_id),
            description: optional(&self.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_to_dto() {
        let form = ProductForm {
            name: " Cà phê sữa ".into(),
            sku: "".into(),
            price: "25000".into(),
            stock: "40".into(),
            category_id: "3".into(),
            description: " ".into(),
        };
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.name, "Cà phê sữa");
        assert_eq!(dto.sku, None);
        assert_eq!(dto.price, 25000.0);
        assert_eq!(dto.stock, 40);
        assert_eq!(dto.category_id, Some(EntityId::Int(3)));
        assert_eq!(dto.description, None);
    }

    #[test]
    fn test_negative_stock_rejected() {
        let form = ProductForm {
            name: "Trà".into(),
            stock: "-1".into(),
            ..Default::default()
        };
        assert!(form.to_dto().is_err());
    }

    #[test]
    fn test_edit_round_trips_through_form() {
        let product: Product = serde_json::from_str(
            r#"{"id":9,"name":"Bánh mì","sku":"BM-01","price":15000,"stock":8,"category_id":"c-2"}"#,
        )
        .unwrap();
        let dto = ProductForm::from_product(&product).to_dto().unwrap();
        assert_eq!(dto, ProductDto::from(&product));
    }
}
