use crate::shared::api::url::resource;
use crate::shared::api::{ApiClient, ApiError, RequestScope};
use contracts::common::{EntityId, ListQuery};
use contracts::domain::a002_category::aggregate::{Category, CategoryDto};
use serde::de::IgnoredAny;

pub const CATEGORIES: &str = "/categories";

pub async fn list(client: &ApiClient, scope: &RequestScope) -> Result<Vec<Category>, ApiError> {
    client.list(scope, CATEGORIES, &ListQuery::new()).await
}

pub async fn create(client: &ApiClient, scope: &RequestScope, dto: &CategoryDto) -> Result<(), ApiError> {
    let _: IgnoredAny = client.post(scope, CATEGORIES, dto).await?;
    Ok(())
}

pub async fn update(
    client: &ApiClient,
    scope: &RequestScope,
    id: &EntityId,
    dto: &CategoryDto,
) -> Result<(), ApiError> {
    let _: IgnoredAny = client.put(scope, &resource(CATEGORIES, id), dto).await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, scope: &RequestScope, id: &EntityId) -> Result<(), ApiError> {
    client.delete(scope, &resource(CATEGORIES, id)).await
}
