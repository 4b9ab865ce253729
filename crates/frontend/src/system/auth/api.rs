use crate::shared::api::{ApiClient, ApiError, RequestScope};
use contracts::system::auth::{LoginRequest, LoginResponse};

pub const LOGIN_PATH: &str = "/auth/login";

/// `POST /auth/login`, no retry
pub async fn login(
    client: &ApiClient,
    scope: &RequestScope,
    username: &str,
    password: &str,
) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    client.post(scope, LOGIN_PATH, &request).await
}
