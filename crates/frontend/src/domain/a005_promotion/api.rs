use crate::shared::api::url::resource;
use crate::shared::api::{ApiClient, ApiError, RequestScope};
use contracts::common::{EntityId, ListQuery};
use contracts::domain::a005_promotion::aggregate::{Promotion, PromotionDto};
use serde::de::IgnoredAny;

pub const PROMOTIONS: &str = "/api/promotions";

/// Filter values accepted by `?status=`
pub const STATUS_FILTERS: [(&str, &str); 3] = [
    ("all", "Tất cả"),
    ("active", "Đang áp dụng"),
    ("inactive", "Ngừng áp dụng"),
];

pub async fn list(
    client: &ApiClient,
    scope: &RequestScope,
    status: &str,
) -> Result<Vec<Promotion>, ApiError> {
    client
        .list(scope, PROMOTIONS, &ListQuery::new().status(status))
        .await
}

pub async fn create(client: &ApiClient, scope: &RequestScope, dto: &PromotionDto) -> Result<(), ApiError> {
    let _: IgnoredAny = client.post(scope, PROMOTIONS, dto).await?;
    Ok(())
}

pub async fn update(
    client: &ApiClient,
    scope: &RequestScope,
    id: &EntityId,
    dto: &PromotionDto,
) -> Result<(), ApiError> {
    let _: IgnoredAny = client.put(scope, &resource(PROMOTIONS, id), dto).await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, scope: &RequestScope, id: &EntityId) -> Result<(), ApiError> {
    client.delete(scope, &resource(PROMOTIONS, id)).await
}
