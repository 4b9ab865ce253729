//! State of a list page, independent of the reactive layer.
//!
//! Every fetch is stamped with a generation; only the response for the latest
//! generation is applied, so a slow response can never overwrite a newer one.

use crate::shared::api::ApiError;

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
    generation: u64,
}

/// What happened to a finished fetch
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Applied,
    /// A newer fetch was started; result dropped
    Stale,
    /// Fetch failed; list emptied, message stored
    Failed(ApiError),
}

/// What the page body should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Failed,
    Rows,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            loaded: false,
            error: None,
            generation: 0,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Mark a fetch as started and return its generation.
    /// A retry after a failure shows the loading state, not the old error.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        if self.error.take().is_some() {
            self.loaded = false;
        }
        self.generation
    }

    pub fn finish_load(&mut self, generation: u64, result: Result<Vec<T>, ApiError>) -> LoadOutcome {
        if generation != self.generation {
            return LoadOutcome::Stale;
        }
        self.loading = false;
        self.loaded = true;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                LoadOutcome::Applied
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e.user_message());
                LoadOutcome::Failed(e)
            }
        }
    }

    pub fn view(&self) -> ListView {
        if self.error.is_some() {
            ListView::Failed
        } else if !self.loaded {
            ListView::Loading
        } else if self.items.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_is_empty_state_not_error() {
        let mut state: ListState<u32> = ListState::new();
        let gen = state.begin_load();
        assert_eq!(state.view(), ListView::Loading);
        assert_eq!(state.finish_load(gen, Ok(vec![])), LoadOutcome::Applied);
        assert_eq!(state.view(), ListView::Empty);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_failed_fetch_leaves_empty_list() {
        let mut state = ListState::new();
        let gen = state.begin_load();
        state.finish_load(gen, Ok(vec![1, 2, 3]));

        let gen = state.begin_load();
        let outcome = state.finish_load(gen, Err(ApiError::Network("Failed to fetch".into())));
        assert!(matches!(outcome, LoadOutcome::Failed(ApiError::Network(_))));
        assert!(state.items.is_empty());
        assert!(!state.loading);
        assert_eq!(state.view(), ListView::Failed);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = ListState::new();
        let first = state.begin_load();
        let second = state.begin_load();

        assert_eq!(state.finish_load(second, Ok(vec!["new"])), LoadOutcome::Applied);
        assert_eq!(state.finish_load(first, Ok(vec!["old"])), LoadOutcome::Stale);
        assert_eq!(state.items, vec!["new"]);
    }

    #[test]
    fn test_retry_after_failure_shows_loading() {
        let mut state: ListState<u32> = ListState::new();
        let gen = state.begin_load();
        state.finish_load(gen, Err(ApiError::Timeout));
        assert_eq!(state.view(), ListView::Failed);

        let gen = state.begin_load();
        assert_eq!(state.view(), ListView::Loading);
        state.finish_load(gen, Err(ApiError::Timeout));
        assert_eq!(state.view(), ListView::Failed);
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut state = ListState::new();
        let gen = state.begin_load();
        state.finish_load(gen, Err(ApiError::Timeout));
        let gen = state.begin_load();
        state.finish_load(gen, Ok(vec![7]));
        assert_eq!(state.view(), ListView::Rows);
        assert!(state.error.is_none());
    }
}
