use crate::shared::alert::report_error;
use crate::shared::api::{ApiError, RequestScope};
use crate::shared::list_state::{ListState, ListView, LoadOutcome};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// Reactive wrapper around [`ListState`] owned by a list page.
///
/// The controller owns the page's [`RequestScope`] and cancels it on unmount.
/// Mutations never refresh implicitly: `mutate` runs the command and hands the
/// result to the caller's `on_success`, which decides whether to reload.
pub struct ListController<T: Send + Sync + 'static> {
    pub state: RwSignal<ListState<T>>,
    scope: StoredValue<RequestScope, LocalStorage>,
}

impl<T: Send + Sync + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListController<T> {}

impl<T: Clone + Send + Sync + 'static> ListController<T> {
    pub fn new() -> Self {
        let state = RwSignal::new(ListState::new());
        let scope = StoredValue::new_local(RequestScope::new());
        on_cleanup(move || {
            if let Some(scope) = scope.try_get_value() {
                scope.cancel();
            }
        });
        Self { state, scope }
    }

    pub fn scope(&self) -> Option<RequestScope> {
        self.scope.try_get_value()
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items.clone())
    }

    /// First row, for pages that load a single document into the controller
    pub fn record(&self) -> Option<T> {
        self.state.with(|s| s.items.first().cloned())
    }

    pub fn view(&self) -> ListView {
        self.state.with(|s| s.view())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    /// Start a list fetch. Older in-flight fetches become stale.
    pub fn load<F, Fut>(&self, fetch: F)
    where
        F: FnOnce(RequestScope) -> Fut,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let Some(scope) = self.scope() else {
            return;
        };
        if scope.is_cancelled() {
            return;
        }
        let state = self.state;
        let Some(generation) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        let request = fetch(scope.clone());

        spawn_local(async move {
            let result = request.await;
            if scope.is_cancelled() {
                log::debug!("list response dropped, page unmounted");
                return;
            }
            match state.try_update(|s| s.finish_load(generation, result)) {
                Some(LoadOutcome::Failed(e)) => log::error!("list fetch failed: {}", e),
                Some(LoadOutcome::Stale) => {
                    log::debug!("stale list response ignored (generation {})", generation)
                }
                _ => {}
            }
        });
    }

    /// Run a create/update/delete command.
    ///
    /// Errors are logged and shown in a blocking alert prefixed by `context`.
    pub fn mutate<F, Fut, R, S>(&self, context: &'static str, command: F, on_success: S)
    where
        F: FnOnce(RequestScope) -> Fut,
        Fut: Future<Output = Result<R, ApiError>> + 'static,
        R: 'static,
        S: FnOnce(R) + 'static,
    {
        let Some(scope) = self.scope() else {
            return;
        };
        let request = command(scope.clone());

        spawn_local(async move {
            match request.await {
                Ok(value) => {
                    if !scope.is_cancelled() {
                        on_success(value);
                    }
                }
                Err(e) => report_error(context, &e),
            }
        });
    }
}

impl<T: Clone + Send + Sync + 'static> Default for ListController<T> {
    fn default() -> Self {
        Self::new()
    }
}
