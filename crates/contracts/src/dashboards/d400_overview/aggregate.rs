use crate::common::lenient;
use crate::domain::a004_order::aggregate::Order;
use serde::{Deserialize, Serialize};

/// Payload of `GET /api/dashboard/stats`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    #[serde(alias = "totalRevenue", deserialize_with = "lenient::number")]
    pub total_revenue: f64,
    #[serde(alias = "todayRevenue", deserialize_with = "lenient::number")]
    pub today_revenue: f64,
    #[serde(alias = "totalOrders", deserialize_with = "lenient::number")]
    pub total_orders: u32,
    #[serde(alias = "pendingOrders", deserialize_with = "lenient::number")]
    pub pending_orders: u32,
    #[serde(alias = "totalCustomers", deserialize_with = "lenient::number")]
    pub total_customers: u32,
    #[serde(alias = "totalProducts", deserialize_with = "lenient::number")]
    pub total_products: u32,
    #[serde(alias = "lowStockProducts", alias = "lowStock", deserialize_with = "lenient::number")]
    pub low_stock_products: u32,
    #[serde(alias = "recentOrders", deserialize_with = "lenient::or_default")]
    pub recent_orders: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_stats_decode() {
        let stats: DashboardStats =
            serde_json::from_str(r#"{"totalRevenue": 1500000, "totalOrders": 12}"#).unwrap();
        assert_eq!(stats.total_revenue, 1_500_000.0);
        assert_eq!(stats.total_orders, 12);
        assert!(stats.recent_orders.is_empty());
    }
}
