use crate::shared::api::url::resource;
use crate::shared::api::{ApiClient, ApiError, RequestScope};
use contracts::common::{EntityId, ListQuery};
use contracts::domain::a004_order::aggregate::{CreateOrderDto, Order, OrderStatus, OrderStatusUpdate};
use serde::de::IgnoredAny;

pub const ORDERS: &str = "/api/orders";
pub const LIST_LIMIT: u32 = 50;

pub fn list_query(search: &str, status: &str) -> ListQuery {
    ListQuery::new().search(search).status(status).limit(LIST_LIMIT)
}

pub async fn list(
    client: &ApiClient,
    scope: &RequestScope,
    search: &str,
    status: &str,
) -> Result<Vec<Order>, ApiError> {
    client.list(scope, ORDERS, &list_query(search, status)).await
}

pub async fn create(client: &ApiClient, scope: &RequestScope, dto: &CreateOrderDto) -> Result<(), ApiError> {
    let _: IgnoredAny = client.post(scope, ORDERS, dto).await?;
    Ok(())
}

/// `PATCH /api/orders/{id}/status`
pub async fn update_status(
    client: &ApiClient,
    scope: &RequestScope,
    id: &EntityId,
    status: OrderStatus,
) -> Result<(), ApiError> {
    let path = format!("{}/status", resource(ORDERS, id));
    let _: IgnoredAny = client.patch(scope, &path, &OrderStatusUpdate { status }).await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, scope: &RequestScope, id: &EntityId) -> Result<(), ApiError> {
    client.delete(scope, &resource(ORDERS, id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::url::with_query;

    #[test]
    fn test_list_query() {
        assert_eq!(with_query(ORDERS, &list_query("", "all")), "/api/orders?limit=50");
        assert_eq!(
            with_query(ORDERS, &list_query("tra", "pending")),
            "/api/orders?search=tra&status=pending&limit=50"
        );
    }
}
