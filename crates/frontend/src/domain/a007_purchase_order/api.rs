use crate::shared::api::url::resource;
use crate::shared::api::{ApiClient, ApiError, RequestScope};
use contracts::common::{EntityId, ListQuery};
use contracts::domain::a007_purchase_order::aggregate::{
    CreatePurchaseOrderDto, PurchaseOrder, PurchaseOrderStatus, PurchaseOrderStatusUpdate,
};
use serde::de::IgnoredAny;

pub const PURCHASE_ORDERS: &str = "/api/purchase-orders";
pub const LIST_LIMIT: u32 = 50;

pub fn list_query(status: &str) -> ListQuery {
    ListQuery::new().status(status).limit(LIST_LIMIT)
}

pub async fn list(
    client: &ApiClient,
    scope: &RequestScope,
    status: &str,
) -> Result<Vec<PurchaseOrder>, ApiError> {
    client.list(scope, PURCHASE_ORDERS, &list_query(status)).await
}

pub async fn create(
    client: &ApiClient,
    scope: &RequestScope,
    dto: &CreatePurchaseOrderDto,
) -> Result<(), ApiError> {
    let _: IgnoredAny = client.post(scope, PURCHASE_ORDERS, dto).await?;
    Ok(())
}

/// `PATCH /api/purchase-orders/{id}/status`
pub async fn update_status(
    client: &ApiClient,
    scope: &RequestScope,
    id: &EntityId,
    status: PurchaseOrderStatus,
) -> Result<(), ApiError> {
    let path = format!("{}/status", resource(PURCHASE_ORDERS, id));
    let _: IgnoredAny = client
        .patch(scope, &path, &PurchaseOrderStatusUpdate { status })
        .await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, scope: &RequestScope, id: &EntityId) -> Result<(), ApiError> {
    client.delete(scope, &resource(PURCHASE_ORDERS, id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::url::with_query;

    #[test]
    fn test_list_query() {
        assert_eq!(
            with_query(PURCHASE_ORDERS, &list_query("all")),
            "/api/purchase-orders?limit=50"
        );
        assert_eq!(
            with_query(PURCHASE_ORDERS, &list_query("ordered")),
            "/api/purchase-orders?status=ordered&limit=50"
        );
    }
}
