//! Fetch lifecycle for paginated list screens.
//!
//! The backend collaborator only promises a `{data, total}` response; nothing
//! here retries or caches. Responses are fenced by the page config that
//! produced them: a slow response to a superseded config is discarded instead
//! of overwriting newer data.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::page_config::PageConfig;

#[derive(Debug, Clone)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }
}

pub struct PagedQuery<T: Send + Sync + 'static> {
    pub config: RwSignal<PageConfig>,
    pub state: RwSignal<QueryState<T>>,
    reload: RwSignal<u32>,
}

// Manual impls: the handle is all signals, so it is copyable for any `T`.
impl<T: Send + Sync + 'static> Clone for PagedQuery<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PagedQuery<T> {}

impl<T: Send + Sync + 'static> PagedQuery<T> {
    /// Re-run the fetch for the current config, e.g. after a mutation.
    pub fn refetch(&self) {
        self.reload.update(|n| *n = n.wrapping_add(1));
    }
}

/// Wire a fetcher to a page-config signal.
///
/// Every change of the config (or an explicit `refetch`) starts a request.
/// When a response arrives it is applied only if the config is still the one
/// the request was made with; otherwise it is logged and dropped.
pub fn use_paged_query<T, F, Fut>(config: RwSignal<PageConfig>, fetcher: F) -> PagedQuery<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(PageConfig) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let state = RwSignal::new(QueryState::<T>::default());
    let reload = RwSignal::new(0u32);

    Effect::new(move |_| {
        let requested = config.get();
        let generation = reload.get();
        state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let fetcher = fetcher.clone();
        spawn_local(async move {
            let result = fetcher(requested.clone()).await;

            // Fencing: last-write-wins is not good enough when responses can
            // arrive out of order, so match against the current parameters.
            if config.get_untracked() != requested || reload.get_untracked() != generation {
                log::debug!("discarding response for superseded page config");
                return;
            }

            match result {
                Ok(data) => state.set(QueryState {
                    data: Some(data),
                    is_loading: false,
                    error: None,
                }),
                Err(message) => state.update(|s| {
                    s.is_loading = false;
                    s.error = Some(message);
                }),
            }
        });
    });

    PagedQuery {
        config,
        state,
        reload,
    }
}
