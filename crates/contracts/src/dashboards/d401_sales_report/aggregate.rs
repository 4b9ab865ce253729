use crate::common::{lenient, EntityId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    Today,
    #[default]
    Week,
    Month,
    Year,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        ReportPeriod::Today,
        ReportPeriod::Week,
        ReportPeriod::Month,
        ReportPeriod::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPeriod::Today => "today",
            ReportPeriod::Week => "week",
            ReportPeriod::Month => "month",
            ReportPeriod::Year => "year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportPeriod::Today => "Hôm nay",
            ReportPeriod::Week => "7 ngày qua",
            ReportPeriod::Month => "Tháng này",
            ReportPeriod::Year => "Năm nay",
        }
    }

    pub fn from_str_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    #[serde(default, alias = "productId")]
    pub product_id: Option<EntityId>,
    #[serde(default, alias = "productName")]
    pub name: String,
    #[serde(default, alias = "quantitySold", alias = "quantity", deserialize_with = "lenient::number")]
    pub quantity_sold: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub date: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub revenue: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub orders: u32,
}

/// Payload of `GET /api/reports/sales?period=...`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalesReport {
    pub period: Option<String>,
    #[serde(alias = "totalRevenue", deserialize_with = "lenient::number")]
    pub total_revenue: f64,
    #[serde(alias = "totalOrders", deserialize_with = "lenient::number")]
    pub total_orders: u32,
    #[serde(alias = "averageOrderValue", deserialize_with = "lenient::number")]
    pub average_order_value: f64,
    #[serde(alias = "topProducts", deserialize_with = "lenient::or_default")]
    pub top_products: Vec<TopProduct>,
    #[serde(alias = "revenueByDay", alias = "daily", deserialize_with = "lenient::or_default")]
    pub revenue_by_day: Vec<RevenuePoint>,
}

impl SalesReport {
    /// Highest daily revenue, used to scale the bar chart
    pub fn peak_revenue(&self) -> f64 {
        self.revenue_by_day
            .iter()
            .map(|p| p.revenue)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parsing_defaults_to_week() {
        assert_eq!(ReportPeriod::from_str_value("month"), ReportPeriod::Month);
        assert_eq!(ReportPeriod::from_str_value("decade"), ReportPeriod::Week);
    }

    #[test]
    fn test_peak_revenue() {
        let report: SalesReport = serde_json::from_str(
            r#"{"daily":[{"date":"2024-05-01","revenue":100},{"date":"2024-05-02","revenue":250}]}"#,
        )
        .unwrap();
        assert_eq!(report.peak_revenue(), 250.0);
        assert_eq!(SalesReport::default().peak_revenue(), 0.0);
    }
}
