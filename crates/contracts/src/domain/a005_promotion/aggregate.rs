use crate::common::{lenient, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[default]
    #[serde(alias = "percentage")]
    Percent,
    #[serde(alias = "amount")]
    Fixed,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percent => "percent",
            DiscountType::Fixed => "fixed",
        }
    }

    pub fn from_str_value(value: &str) -> Self {
        match value {
            "fixed" => DiscountType::Fixed,
            _ => DiscountType::Percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: EntityId,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub code: String,
    pub name: String,
    #[serde(default, alias = "discountType", deserialize_with = "lenient::or_default")]
    pub discount_type: DiscountType,
    #[serde(default, alias = "discountValue", deserialize_with = "lenient::number")]
    pub discount_value: f64,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, alias = "endDate")]
    pub end_date: Option<String>,
    #[serde(default, alias = "isActive", deserialize_with = "lenient::or_default")]
    pub is_active: bool,
    #[serde(default, alias = "usageCount", deserialize_with = "lenient::number")]
    pub usage_count: u32,
}

/// Body of `POST /api/promotions` and `PUT /api/promotions/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionDto {
    pub code: String,
    pub name: String,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub is_active: bool,
}

impl From<&Promotion> for PromotionDto {
    fn from(p: &Promotion) -> Self {
        Self {
            code: p.code.clone(),
            name: p.name.clone(),
            discount_type: p.discount_type,
            discount_value: p.discount_value,
            start_date: p.start_date.clone(),
            end_date: p.end_date.clone(),
            is_active: p.is_active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_aliases() {
        let p: Promotion = serde_json::from_str(
            r#"{"id":1,"name":"Tết","discountType":"percentage","discountValue":15}"#,
        )
        .unwrap();
        assert_eq!(p.discount_type, DiscountType::Percent);
        assert_eq!(p.discount_value, 15.0);
        assert!(!p.is_active);
    }
}
