//! Service worker registration. Notification delivery stays on polling; the
//! worker is registered so a push channel can be added without touching pages.

use crate::config::ServiceWorkerConfig;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn should_register(config: &ServiceWorkerConfig, supported: bool) -> bool {
    config.enabled && supported && !config.script_url.trim().is_empty()
}

fn is_supported(navigator: &web_sys::Navigator) -> bool {
    js_sys::Reflect::has(navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false)
}

/// Register the worker in the background; failure is logged, never fatal
pub fn register(config: &ServiceWorkerConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = is_supported(&navigator);
    if !should_register(config, supported) {
        log::debug!(
            "service worker not registered (enabled: {}, supported: {})",
            config.enabled,
            supported
        );
        return;
    }

    let script_url = config.script_url.clone();
    let promise = navigator.service_worker().register(&script_url);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("service worker registered: {}", script_url),
            Err(e) => log::warn!("service worker registration failed: {:?}", e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_register() {
        let mut config = ServiceWorkerConfig {
            enabled: true,
            script_url: "/sw.js".into(),
        };
        assert!(should_register(&config, true));
        assert!(!should_register(&config, false));

        config.enabled = false;
        assert!(!should_register(&config, true));

        config.enabled = true;
        config.script_url = " ".into();
        assert!(!should_register(&config, true));
    }
}
