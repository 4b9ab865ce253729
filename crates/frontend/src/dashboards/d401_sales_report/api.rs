use crate::shared::api::url::with_query;
use crate::shared::api::{ApiClient, ApiError, RequestScope};
use contracts::common::ListQuery;
use contracts::dashboards::d401_sales_report::aggregate::{ReportPeriod, SalesReport};

pub const SALES: &str = "/api/reports/sales";

pub fn sales_path(period: ReportPeriod) -> String {
    with_query(SALES, &ListQuery::new().period(period.as_str()))
}

pub async fn sales(
    client: &ApiClient,
    scope: &RequestScope,
    period: ReportPeriod,
) -> Result<SalesReport, ApiError> {
    client.get(scope, &sales_path(period)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_path() {
        assert_eq!(sales_path(ReportPeriod::Month), "/api/reports/sales?period=month");
        assert_eq!(sales_path(ReportPeriod::default()), "/api/reports/sales?period=week");
    }
}
