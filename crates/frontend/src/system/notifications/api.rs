use crate::shared::api::url::resource;
use crate::shared::api::{ApiClient, ApiError, RequestScope};
use contracts::common::EntityId;
use contracts::system::notifications::NotificationList;
use serde::de::IgnoredAny;

const NOTIFICATIONS: &str = "/api/notifications";

pub async fn fetch(client: &ApiClient, scope: &RequestScope) -> Result<NotificationList, ApiError> {
    client.get(scope, NOTIFICATIONS).await
}

pub async fn mark_read(
    client: &ApiClient,
    scope: &RequestScope,
    id: &EntityId,
) -> Result<(), ApiError> {
    let path = format!("{}/read", resource(NOTIFICATIONS, id));
    let _: IgnoredAny = client.put(scope, &path, &serde_json::json!({})).await?;
    Ok(())
}

pub async fn mark_all_read(client: &ApiClient, scope: &RequestScope) -> Result<(), ApiError> {
    let path = format!("{}/read-all", NOTIFICATIONS);
    let _: IgnoredAny = client.put(scope, &path, &serde_json::json!({})).await?;
    Ok(())
}

pub async fn delete(client: &ApiClient, scope: &RequestScope, id: &EntityId) -> Result<(), ApiError> {
    client.delete(scope, &resource(NOTIFICATIONS, id)).await
}
