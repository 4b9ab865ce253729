use crate::shared::api::RequestScope;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::shared::storage::BrowserStorage;
use crate::system::auth::preferences::LoginPreferences;
use crate::system::auth::AuthSession;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;

#[component]
pub fn LoginPage(session: AuthSession) -> impl IntoView {
    let prefs = LoginPreferences::load(&BrowserStorage);
    let username = RwSignal::new(prefs.username);
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(prefs.remember);
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let scope = StoredValue::new_local(RequestScope::new());
    on_cleanup(move || {
        if let Some(scope) = scope.try_get_value() {
            scope.cancel();
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(scope) = scope.try_get_value() else {
            return;
        };
        let username_val = username.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        let remember_val = remember.get_untracked();

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            let result = session
                .login(&scope, &username_val, &password_val, remember_val)
                .await;
            if scope.is_cancelled() {
                return;
            }
            if let Err(message) = result {
                error_message.set(Some(message));
            }
            is_loading.set(false);
        });
    };

    move || {
        if session.is_authenticated() {
            return view! { <Redirect path="/" /> }.into_any();
        }
        view! {
            <PageFrame page_id="login--system" category=PAGE_CAT_SYSTEM>
                <div class="login-container">
                    <div class="login-box">
                        <h1>"Quản lý cửa hàng"</h1>
                        <h2>"Đăng nhập"</h2>

                        <Show when=move || error_message.get().is_some()>
                            <div class="error-message">
                                {move || error_message.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <form on:submit=on_submit>
                            <div class="form-group">
                                <label for="username">"Tên đăng nhập"</label>
                                <input
                                    type="text"
                                    id="username"
                                    autocomplete="username"
                                    prop:value=move || username.get()
                                    on:input=move |ev| username.set(event_target_value(&ev))
                                    required
                                    disabled=move || is_loading.get()
                                />
                            </div>

                            <div class="form-group">
                                <label for="password">"Mật khẩu"</label>
                                <input
                                    type="password"
                                    id="password"
                                    autocomplete="current-password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                    required
                                    disabled=move || is_loading.get()
                                />
                            </div>

                            <label class="form-check">
                                <input
                                    type="checkbox"
                                    prop:checked=move || remember.get()
                                    on:change=move |ev| remember.set(event_target_checked(&ev))
                                />
                                " Ghi nhớ đăng nhập"
                            </label>

                            <button
                                type="submit"
                                class="btn-primary"
                                disabled=move || is_loading.get()
                            >
                                {move || if is_loading.get() { "Đang đăng nhập..." } else { "Đăng nhập" }}
                            </button>
                        </form>
                    </div>
                </div>
            </PageFrame>
        }
        .into_any()
    }
}
