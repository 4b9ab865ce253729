use crate::shared::api::{ApiClient, ApiError, RequestScope};
use contracts::common::ListQuery;
use contracts::domain::a006_inventory::aggregate::{
    CreateInventoryTransactionDto, InventoryTransaction,
};
use serde::de::IgnoredAny;

pub const TRANSACTIONS: &str = "/inventory/transactions";
pub const LIST_LIMIT: u32 = 50;

pub async fn list(client: &ApiClient, scope: &RequestScope) -> Result<Vec<InventoryTransaction>, ApiError> {
    client
        .list(scope, TRANSACTIONS, &ListQuery::new().limit(LIST_LIMIT))
        .await
}

pub async fn create(
    client: &ApiClient,
    scope: &RequestScope,
    dto: &CreateInventoryTransactionDto,
) -> Result<(), ApiError> {
    let _: IgnoredAny = client.post(scope, TRANSACTIONS, dto).await?;
    Ok(())
}
