//! Top bar: brand, notification bell, signed-in user and logout.

use crate::shared::icons::icon;
use crate::system::auth::AuthSession;
use crate::system::notifications::NotificationBell;
use leptos::prelude::*;

#[component]
pub fn TopHeader(session: AuthSession) -> impl IntoView {
    let user_name = move || {
        session
            .user()
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Quản lý bán lẻ"</span>
            </div>

            <div class="top-header__actions">
                <NotificationBell session=session />

                <div class="top-header__user">
                    <span>{user_name}</span>
                </div>

                <button class="top-header__icon-btn" on:click=move |_| session.logout() title="Đăng xuất">
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
