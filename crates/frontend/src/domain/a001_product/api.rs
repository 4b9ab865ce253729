use crate::shared::api::url::resource;
use crate::shared::api::{ApiClient, ApiError, RequestScope};
use contracts::common::{EntityId, ListQuery};
use contracts::domain::a001_product::aggregate::{Product, ProductDto};
use serde::de::IgnoredAny;

pub const PRODUCTS: &str = "/products";
pub const LIST_LIMIT: u32 = 100;

pub fn list_query(search: &str) -> ListQuery {
    ListQuery::new().search(search).limit(LIST_LIMIT)
}

pub async fn list(
    client: &ApiClient,
    scope: &RequestScope,
    search: &str,
) -> Result<Vec<Product>, ApiError> {
    client.list(scope, PRODUCTS, &list_query(search)).await
}

pub async fn create(client: &ApiClient, scope: &RequestScope, dto: &ProductDto) -> Result<(), ApiError> {
    let _: IgnoredAny = client.post(scope, PRODUCTS, dto).await?;
    Ok(())
}

pub async fn update(
    client: &ApiClient,
    scope: &RequestScope,
    id: &EntityId,
    dto: &ProductDto,
) -> Result<(), ApiError> {
    let _: IgnoredAny = client.put(scope, &resource(PRODUCTS, id), dto).await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, scope: &RequestScope, id: &EntityId) -> Result<(), ApiError> {
    client.delete(scope, &resource(PRODUCTS, id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::url::with_query;

    #[test]
    fn test_list_path_carries_fixed_limit() {
        assert_eq!(with_query(PRODUCTS, &list_query("")), "/products?limit=100");
        assert_eq!(
            with_query(PRODUCTS, &list_query(" tra ")),
            "/products?search=tra&limit=100"
        );
    }
}
