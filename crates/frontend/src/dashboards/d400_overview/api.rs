use crate::shared::api::{ApiClient, ApiError, RequestScope};
use contracts::dashboards::d400_overview::aggregate::DashboardStats;

pub const STATS: &str = "/api/dashboard/stats";

pub async fn stats(client: &ApiClient, scope: &RequestScope) -> Result<DashboardStats, ApiError> {
    client.get(scope, STATS).await
}
