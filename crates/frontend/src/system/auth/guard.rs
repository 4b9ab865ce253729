use super::context::AuthSession;
use super::session::Session;
use leptos::prelude::*;
use leptos_router::components::Redirect;

pub const LOGIN_ROUTE: &str = "/login";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin,
}

/// Presence of a session is all that is checked; the token is not validated.
pub fn evaluate(session: Option<&Session>) -> GuardDecision {
    match session {
        Some(_) => GuardDecision::Render,
        None => GuardDecision::RedirectToLogin,
    }
}

/// Renders `children` for a signed-in user, otherwise redirects to `/login`
#[component]
pub fn RequireSession(session: AuthSession, children: ChildrenFn) -> impl IntoView {
    move || {
        match session.with_session(evaluate) {
            GuardDecision::Render => children().into_any(),
            GuardDecision::RedirectToLogin => {
                log::debug!("no session, redirecting to {}", LOGIN_ROUTE);
                view! { <Redirect path=LOGIN_ROUTE /> }.into_any()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::common::EntityId;
    use contracts::system::auth::UserInfo;

    #[test]
    fn test_guard_follows_session_presence() {
        assert_eq!(evaluate(None), GuardDecision::RedirectToLogin);

        let session = Session {
            token: "t".into(),
            user: UserInfo {
                id: EntityId::Int(7),
                username: "kho".into(),
                full_name: None,
                email: None,
                role: None,
            },
        };
        assert_eq!(evaluate(Some(&session)), GuardDecision::Render);
    }
}
