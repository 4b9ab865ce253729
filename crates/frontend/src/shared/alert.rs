//! Blocking browser dialogs

use crate::shared::api::ApiError;

pub fn alert(message: &str) {
    match web_sys::window() {
        Some(win) => {
            let _ = win.alert_with_message(message);
        }
        None => log::warn!("alert without window: {}", message),
    }
}

/// `window.confirm`; `false` when there is no window
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Log a failed operation and tell the operator. Cancellations stay silent.
pub fn report_error(context: &str, err: &ApiError) {
    if err.is_cancelled() {
        log::debug!("{}: cancelled", context);
        return;
    }
    log::error!("{}: {}", context, err);
    alert(&format!("{}: {}", context, err.user_message()));
}
