//! Login form convenience: remembered username.

use crate::shared::storage::KeyValueStore;

pub const REMEMBER_ME_KEY: &str = "rememberMe";
pub const SAVED_USERNAME_KEY: &str = "savedUsername";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginPreferences {
    pub remember: bool,
    pub username: String,
}

impl LoginPreferences {
    pub fn load(storage: &impl KeyValueStore) -> Self {
        let remember = storage.get(REMEMBER_ME_KEY).as_deref() == Some("true");
        let username = if remember {
            storage.get(SAVED_USERNAME_KEY).unwrap_or_default()
        } else {
            String::new()
        };
        Self { remember, username }
    }

    /// Called after a successful login only
    pub fn save(storage: &impl KeyValueStore, remember: bool, username: &str) {
        if remember {
            storage.set(REMEMBER_ME_KEY, "true");
            storage.set(SAVED_USERNAME_KEY, username);
        } else {
            storage.remove(REMEMBER_ME_KEY);
            storage.remove(SAVED_USERNAME_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn test_remember_then_forget_clears_username() {
        let storage = MemoryStorage::new();

        LoginPreferences::save(&storage, true, "thu.ngan");
        assert_eq!(
            LoginPreferences::load(&storage),
            LoginPreferences {
                remember: true,
                username: "thu.ngan".into()
            }
        );

        LoginPreferences::save(&storage, false, "thu.ngan");
        assert_eq!(LoginPreferences::load(&storage), LoginPreferences::default());
        assert!(storage.get(SAVED_USERNAME_KEY).is_none());
        assert!(storage.get(REMEMBER_ME_KEY).is_none());
    }

    #[test]
    fn test_username_ignored_without_flag() {
        let storage = MemoryStorage::new();
        storage.set(SAVED_USERNAME_KEY, "admin");
        assert_eq!(LoginPreferences::load(&storage).username, "");
    }
}
