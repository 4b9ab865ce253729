use super::error::ApiError;
use super::scope::RequestScope;
use super::url::{join, normalize_base_url, with_query};
use contracts::common::{ListPayload, ListQuery};
use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Thin REST client: resolves paths against the base URL, attaches the
/// bearer token, enforces the timeout and binds every call to a scope.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_ms: u32) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            token: None,
            timeout_ms,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        join(&self.base_url, path)
    }

    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        scope: &RequestScope,
        path: &str,
    ) -> Result<T, ApiError> {
        let text = self.send(scope, Method::GET, path, None).await?;
        decode(&text)
    }

    /// GET a list endpoint; accepts both bare arrays and `{items, count}`
    pub async fn list<T: DeserializeOwned>(
        &self,
        scope: &RequestScope,
        path: &str,
        query: &ListQuery,
    ) -> Result<Vec<T>, ApiError> {
        let payload: ListPayload<T> = self.get(scope, &with_query(path, query)).await?;
        Ok(payload.into_items())
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        scope: &RequestScope,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self
            .send(scope, Method::POST, path, Some(encode(body)?))
            .await?;
        decode(&text)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        scope: &RequestScope,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self
            .send(scope, Method::PUT, path, Some(encode(body)?))
            .await?;
        decode(&text)
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        scope: &RequestScope,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let text = self
            .send(scope, Method::PATCH, path, Some(encode(body)?))
            .await?;
        decode(&text)
    }

    pub async fn delete(&self, scope: &RequestScope, path: &str) -> Result<(), ApiError> {
        self.send(scope, Method::DELETE, path, None).await?;
        Ok(())
    }

    async fn send(
        &self,
        scope: &RequestScope,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ApiError> {
        let url = self.url(path);
        let in_flight = scope.begin(self.timeout_ms)?;
        let signal = in_flight.signal();

        let mut builder = RequestBuilder::new(&url)
            .method(method)
            .header("Accept", "application/json")
            .abort_signal(Some(&signal));
        if let Some(auth) = self.authorization() {
            builder = builder.header("Authorization", &auth);
        }

        let request = match body {
            Some(json) => builder
                .header("Content-Type", "application/json")
                .body(json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::from_gloo(e, false, false))?;

        log::debug!("fetch {}", url);
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::from_gloo(e, in_flight.timed_out(), scope.is_cancelled()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::from_gloo(e, in_flight.timed_out(), scope.is_cancelled()))?;
        drop(in_flight);

        if scope.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        if !response.ok() {
            log::warn!("{} -> HTTP {}", url, status);
            return Err(ApiError::from_response(status, &text));
        }
        Ok(text)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a response body. An empty body (e.g. `204`) decodes as JSON `null`,
/// which is fine for `serde_json::Value` and `Option<T>` targets.
pub(crate) fn decode<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let source = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(source).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::aggregate::Category;

    #[test]
    fn test_base_url_is_normalized_and_token_attached() {
        let client = ApiClient::new("http://localhost:3000/api/", 5000)
            .with_token(Some("t0k".into()));
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.url("/api/orders"), "http://localhost:3000/api/orders");
        assert_eq!(client.authorization().as_deref(), Some("Bearer t0k"));
    }

    #[test]
    fn test_empty_token_means_anonymous() {
        let client = ApiClient::new("http://x", 0).with_token(Some(String::new()));
        assert!(client.authorization().is_none());
    }

    #[test]
    fn test_decode_empty_body() {
        let value: serde_json::Value = decode("").unwrap();
        assert!(value.is_null());
        let missing: Result<Category, _> = decode("  ");
        assert!(matches!(missing, Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_decode_list_shapes() {
        let plain: ListPayload<Category> = decode(r#"[{"id":1,"name":"Đồ uống"}]"#).unwrap();
        let paged: ListPayload<Category> =
            decode(r#"{"items":[{"id":1,"name":"Đồ uống"}],"count":1}"#).unwrap();
        assert_eq!(plain.into_items(), paged.into_items());
    }
}
