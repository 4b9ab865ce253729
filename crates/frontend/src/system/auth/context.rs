use super::api;
use super::preferences::LoginPreferences;
use super::session::{complete_login, Session, SessionStore};
use crate::config::Config;
use crate::shared::api::{ApiClient, RequestScope};
use crate::shared::storage::BrowserStorage;
use contracts::system::auth::UserInfo;
use leptos::prelude::*;

/// Handle to the signed-in session.
///
/// Created once in `App` and passed down as a prop; there is no context lookup.
#[derive(Clone, Copy)]
pub struct AuthSession {
    state: RwSignal<Option<Session>>,
    config: StoredValue<Config>,
}

impl AuthSession {
    /// Restore the persisted session synchronously
    pub fn restore(config: Config) -> Self {
        let session = SessionStore::new(BrowserStorage).restore();
        match &session {
            Some(s) => log::info!("session restored for {}", s.user.username),
            None => log::debug!("no stored session"),
        }
        Self {
            state: RwSignal::new(session),
            config: StoredValue::new(config),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_some())
    }

    /// Tracked read of the current session
    pub fn with_session<R>(&self, f: impl FnOnce(Option<&Session>) -> R) -> R {
        self.state.with(|s| f(s.as_ref()))
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn token(&self) -> Option<String> {
        self.state
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }

    pub fn config(&self) -> Config {
        self.config.get_value()
    }

    /// API client carrying the current token
    pub fn client(&self) -> ApiClient {
        self.anonymous_client().with_token(self.token())
    }

    fn anonymous_client(&self) -> ApiClient {
        self.config
            .with_value(|c| ApiClient::new(&c.api_base(), c.api.timeout_ms))
    }

    /// Authenticate, persist the session and update the remembered username.
    /// On failure returns the message for the login form.
    pub async fn login(
        &self,
        scope: &RequestScope,
        username: &str,
        password: &str,
        remember: bool,
    ) -> Result<(), String> {
        let client = self.anonymous_client();
        let result = api::login(&client, scope, username, password).await;
        if let Err(e) = &result {
            log::warn!("login failed for {}: {}", username, e);
        }

        let session = complete_login(&SessionStore::new(BrowserStorage), result)?;
        LoginPreferences::save(&BrowserStorage, remember, username);
        log::info!("signed in as {}", session.user.username);
        self.state.set(Some(session));
        Ok(())
    }

    pub fn logout(&self) {
        SessionStore::new(BrowserStorage).clear();
        self.state.set(None);
        log::info!("signed out");
    }
}
