use super::api;
use super::feed::NotificationFeed;
use crate::shared::api::{ApiError, RequestScope};
use crate::shared::date_utils::{now_utc, relative_time};
use crate::shared::icons::icon;
use crate::system::auth::AuthSession;
use contracts::common::EntityId;
use contracts::system::notifications::Notification;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::time::Duration;

/// Run a feed action; `on_success` edits local state once the server confirms it
fn run_action<F, Fut, S>(
    scope: StoredValue<RequestScope, LocalStorage>,
    feed: RwSignal<NotificationFeed>,
    context: &'static str,
    request: F,
    on_success: S,
) where
    F: FnOnce(RequestScope) -> Fut,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
    S: FnOnce(&mut NotificationFeed) + 'static,
{
    let Some(scope) = scope.try_get_value() else {
        return;
    };
    let pending = request(scope.clone());
    spawn_local(async move {
        match pending.await {
            Ok(()) if !scope.is_cancelled() => {
                feed.try_update(on_success);
            }
            Ok(()) | Err(ApiError::Cancelled) => {}
            Err(e) => log::error!("{}: {}", context, e),
        }
    });
}

/// Header bell: polls the feed and offers read/delete actions.
///
/// Local state changes only after the server accepted the action.
#[component]
pub fn NotificationBell(session: AuthSession) -> impl IntoView {
    let feed = RwSignal::new(NotificationFeed::default());
    let open = RwSignal::new(false);
    let scope = StoredValue::new_local(RequestScope::new());

    let poll = move || {
        let Some(scope) = scope.try_get_value() else {
            return;
        };
        if scope.is_cancelled() {
            return;
        }
        let client = session.client();
        spawn_local(async move {
            match api::fetch(&client, &scope).await {
                Ok(list) => {
                    feed.try_update(|f| f.apply_poll(list));
                }
                Err(ApiError::Cancelled) => {}
                // previous state stays until the next successful poll
                Err(e) => log::warn!("notification poll failed: {}", e),
            }
        });
    };

    let interval = Duration::from_secs(session.config().notifications.poll_interval_secs.max(1));
    match set_interval_with_handle(poll, interval) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("failed to start notification polling: {:?}", e),
    }
    on_cleanup(move || {
        if let Some(scope) = scope.try_get_value() {
            scope.cancel();
        }
    });
    poll();

    let mark_read = move |id: EntityId| {
        let client = session.client();
        let target = id.clone();
        run_action(
            scope,
            feed,
            "mark notification read",
            move |scope| async move { api::mark_read(&client, &scope, &id).await },
            move |f| {
                f.mark_read(&target);
            },
        );
    };

    let remove = move |id: EntityId| {
        let client = session.client();
        let target = id.clone();
        run_action(
            scope,
            feed,
            "delete notification",
            move |scope| async move { api::delete(&client, &scope, &id).await },
            move |f| {
                f.remove(&target);
            },
        );
    };

    let mark_all = move |_| {
        let client = session.client();
        run_action(
            scope,
            feed,
            "mark all notifications read",
            move |scope| async move { api::mark_all_read(&client, &scope).await },
            |f| f.mark_all_read(),
        );
    };

    let item_view = move |n: Notification| {
        let unread = !n.is_read;
        let read_id = n.id.clone();
        let delete_id = n.id.clone();
        let age = n
            .created_at
            .as_deref()
            .map(|at| relative_time(at, now_utc()))
            .unwrap_or_default();
        view! {
            <li class=if unread { "notification notification--unread" } else { "notification" }>
                <div class="notification__body">
                    <div class="notification__title">{n.title}</div>
                    <div class="notification__message">{n.message}</div>
                    <div class="notification__time">{age}</div>
                </div>
                <div class="notification__actions">
                    {unread.then(|| view! {
                        <button
                            class="button button--icon"
                            title="Đánh dấu đã đọc"
                            on:click=move |_| mark_read(read_id.clone())
                        >
                            {icon("check")}
                        </button>
                    })}
                    <button
                        class="button button--icon"
                        title="Xóa"
                        on:click=move |_| remove(delete_id.clone())
                    >
                        {icon("trash")}
                    </button>
                </div>
            </li>
        }
    };

    view! {
        <div class="notification-bell">
            <button
                class="button button--icon notification-bell__toggle"
                title="Thông báo"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("bell")}
                {move || feed.with(|f| f.badge_text()).map(|text| view! {
                    <span class="notification-bell__badge">{text}</span>
                })}
            </button>
            <Show when=move || open.get()>
                <div class="notification-bell__panel">
                    <div class="notification-bell__header">
                        <span>"Thông báo"</span>
                        <button
                            class="button button--link"
                            disabled=move || feed.with(|f| f.unread_count == 0)
                            on:click=mark_all
                        >
                            "Đánh dấu tất cả đã đọc"
                        </button>
                    </div>
                    <Show
                        when=move || feed.with(|f| !f.items.is_empty())
                        fallback=|| view! { <div class="notification-bell__empty">"Không có thông báo"</div> }
                    >
                        <ul class="notification-bell__list">
                            <For
                                each=move || feed.get().items
                                key=|n| (n.id.clone(), n.is_read)
                                children=item_view
                            />
                        </ul>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
