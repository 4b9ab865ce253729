use crate::shared::api::url::resource;
use crate::shared::api::{ApiClient, ApiError, RequestScope};
use contracts::common::{EntityId, ListQuery};
use contracts::domain::a003_customer::aggregate::{Customer, CustomerDto};
use serde::de::IgnoredAny;

pub const CUSTOMERS: &str = "/api/customers";
pub const LIST_LIMIT: u32 = 100;

pub async fn list(
    client: &ApiClient,
    scope: &RequestScope,
    search: &str,
) -> Result<Vec<Customer>, ApiError> {
    let query = ListQuery::new().search(search).limit(LIST_LIMIT);
    client.list(scope, CUSTOMERS, &query).await
}

pub async fn create(client: &ApiClient, scope: &RequestScope, dto: &CustomerDto) -> Result<(), ApiError> {
    let _: IgnoredAny = client.post(scope, CUSTOMERS, dto).await?;
    Ok(())
}

pub async fn update(
    client: &ApiClient,
    scope: &RequestScope,
    id: &EntityId,
    dto: &CustomerDto,
) -> Result<(), ApiError> {
    let _: IgnoredAny = client.put(scope, &resource(CUSTOMERS, id), dto).await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, scope: &RequestScope, id: &EntityId) -> Result<(), ApiError> {
    client.delete(scope, &resource(CUSTOMERS, id)).await
}
