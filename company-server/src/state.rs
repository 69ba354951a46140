//! Application state shared across handlers

use std::sync::Arc;

use crate::db::CompanyStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Box<dyn CompanyStore>,
}

impl AppState {
    pub fn new(store: impl CompanyStore + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: Box::new(store),
            }),
        }
    }

    pub fn store(&self) -> &dyn CompanyStore {
        self.inner.store.as_ref()
    }
}
