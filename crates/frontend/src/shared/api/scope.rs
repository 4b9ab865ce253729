use super::error::ApiError;
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys::{AbortController, AbortSignal};

/// Lifetime of the requests issued by one mounted page or widget.
///
/// Each request registers an `AbortController` here. `cancel()` aborts every
/// in-flight request and makes later requests fail fast with
/// `ApiError::Cancelled`, so responses arriving after unmount never touch
/// disposed state.
#[derive(Clone, Default)]
pub struct RequestScope {
    inner: Rc<ScopeInner>,
}

#[derive(Default)]
struct ScopeInner {
    cancelled: Cell<bool>,
    next_id: Cell<u64>,
    in_flight: RefCell<Vec<(u64, AbortController)>>,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Number of requests currently registered
    pub fn pending(&self) -> usize {
        self.inner.in_flight.borrow().len()
    }

    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let controllers: Vec<_> = self.inner.in_flight.borrow_mut().drain(..).collect();
        if !controllers.is_empty() {
            log::debug!("aborting {} in-flight request(s)", controllers.len());
        }
        for (_, controller) in controllers {
            controller.abort();
        }
    }

    /// Register a request; the returned guard unregisters it on drop.
    ///
    /// A non-zero `timeout_ms` arms a timer that aborts just this request.
    pub(crate) fn begin(&self, timeout_ms: u32) -> Result<InFlight, ApiError> {
        if self.is_cancelled() {
            return Err(ApiError::Cancelled);
        }
        let controller = AbortController::new()
            .map_err(|e| ApiError::Other(format!("AbortController unavailable: {:?}", e)))?;

        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .in_flight
            .borrow_mut()
            .push((id, controller.clone()));

        let timed_out = Rc::new(Cell::new(false));
        let timer = (timeout_ms > 0).then(|| {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            Timeout::new(timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        });

        Ok(InFlight {
            scope: self.clone(),
            id,
            controller,
            timed_out,
            _timer: timer,
        })
    }

    fn release(&self, id: u64) {
        self.inner
            .in_flight
            .borrow_mut()
            .retain(|(entry, _)| *entry != id);
    }
}

/// Registration of a single request in its scope
pub(crate) struct InFlight {
    scope: RequestScope,
    id: u64,
    controller: AbortController,
    timed_out: Rc<Cell<bool>>,
    _timer: Option<Timeout>,
}

impl InFlight {
    pub fn signal(&self) -> AbortSignal {
        self.controller.signal()
    }

    pub fn timed_out(&self) -> bool {
        self.timed_out.get()
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.scope.release(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_sticky_and_idempotent() {
        let scope = RequestScope::new();
        assert!(!scope.is_cancelled());
        scope.cancel();
        scope.cancel();
        assert!(scope.is_cancelled());
        assert_eq!(scope.pending(), 0);
    }

    #[test]
    fn test_cancelled_scope_rejects_new_requests() {
        let scope = RequestScope::new();
        let clone = scope.clone();
        clone.cancel();
        assert!(matches!(scope.begin(1000), Err(ApiError::Cancelled)));
    }
}
