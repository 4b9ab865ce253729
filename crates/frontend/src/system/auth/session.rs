//! Persisted session: token and user record in durable storage.

use crate::shared::api::ApiError;
use crate::shared::storage::KeyValueStore;
use contracts::system::auth::{LoginResponse, UserInfo};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

pub struct SessionStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted session. A partial or corrupt record is cleared.
    pub fn restore(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = self.storage.get(USER_KEY);

        match (token, user) {
            (None, None) => return None,
            (Some(token), Some(raw)) => match serde_json::from_str::<UserInfo>(&raw) {
                Ok(user) => return Some(Session { token, user }),
                Err(e) => log::warn!("stored user record is invalid, clearing session: {}", e),
            },
            _ => log::warn!("incomplete stored session, clearing"),
        }

        self.clear();
        None
    }

    pub fn persist(&self, session: &Session) -> Result<(), serde_json::Error> {
        let user = serde_json::to_string(&session.user)?;
        self.storage.set(TOKEN_KEY, &session.token);
        self.storage.set(USER_KEY, &user);
        Ok(())
    }

    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

/// Turn a login response into a persisted session, or a message for the form.
/// Nothing is written on failure.
pub fn complete_login<S: KeyValueStore>(
    store: &SessionStore<S>,
    result: Result<LoginResponse, ApiError>,
) -> Result<Session, String> {
    let response = result.map_err(|e| e.login_message())?;
    if response.token.trim().is_empty() {
        return Err("Phản hồi đăng nhập không hợp lệ.".to_string());
    }

    let session = Session {
        token: response.token,
        user: response.user,
    };
    store.persist(&session).map_err(|e| {
        log::error!("failed to persist session: {}", e);
        "Không thể lưu phiên đăng nhập.".to_string()
    })?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use contracts::common::EntityId;

    fn user() -> UserInfo {
        UserInfo {
            id: EntityId::Int(1),
            username: "admin".into(),
            full_name: Some("Quản trị viên".into()),
            email: None,
            role: Some("admin".into()),
        }
    }

    fn response(token: &str) -> LoginResponse {
        LoginResponse {
            token: token.into(),
            user: user(),
        }
    }

    #[test]
    fn test_login_persists_token_and_user() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(&storage);

        let session = complete_login(&store, Ok(response("abc"))).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("abc"));

        let stored: UserInfo = serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(stored, user());
        assert_eq!(store.restore(), Some(session));
    }

    #[test]
    fn test_rejected_login_persists_nothing() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(&storage);

        let err = complete_login(&store, Err(ApiError::Server { status: 401, message: None }))
            .unwrap_err();
        assert_eq!(err, "Tên đăng nhập hoặc mật khẩu không đúng.");
        assert!(storage.is_empty());
    }

    #[test]
    fn test_unreachable_backend_message_differs() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(&storage);

        let timeout = complete_login(&store, Err(ApiError::Timeout)).unwrap_err();
        let network =
            complete_login(&store, Err(ApiError::Network("Failed to fetch".into()))).unwrap_err();
        assert_ne!(timeout, network);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(&storage);
        assert!(complete_login(&store, Ok(response("  "))).is_err());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_corrupt_user_clears_leftovers() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "abc");
        storage.set(USER_KEY, "{not json");

        assert_eq!(SessionStore::new(&storage).restore(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_token_without_user_is_cleared() {
        let storage = MemoryStorage::new();
        storage.set(TOKEN_KEY, "abc");

        assert_eq!(SessionStore::new(&storage).restore(), None);
        assert!(storage.get(TOKEN_KEY).is_none());
    }

    #[test]
    fn test_clear_removes_session_keys_only() {
        let storage = MemoryStorage::new();
        let store = SessionStore::new(&storage);
        storage.set("savedUsername", "admin");
        complete_login(&store, Ok(response("abc"))).unwrap();

        store.clear();
        assert_eq!(store.restore(), None);
        assert_eq!(storage.get("savedUsername").as_deref(), Some("admin"));
    }
}
