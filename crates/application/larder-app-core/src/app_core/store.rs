use std::sync::{Arc, Mutex};

use crate::domain::{AppState, DialogState, RecipeForm};

use super::{events::DomainEvent, reducer::reduce};

#[derive(Clone, Default)]
pub struct AppStore {
    inner: Arc<Mutex<AppState>>,
}

impl AppStore {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn state(&self) -> AppState {
        self.inner.lock().unwrap().clone()
    }

    pub fn apply(&self, ev: DomainEvent) {
        let mut guard = self.inner.lock().unwrap();
        let next = reduce(guard.clone(), ev);
        *guard = next;
    }

    /// Direct form access for UI text bindings.
    pub fn with_form_mut<R>(&self, f: impl FnOnce(&mut RecipeForm) -> R) -> R {
        let mut guard = self.inner.lock().unwrap();
        f(&mut guard.form)
    }

    pub fn with_dialog_mut<R>(&self, f: impl FnOnce(&mut DialogState) -> R) -> Option<R> {
        let mut guard = self.inner.lock().unwrap();
        guard.dialog.as_mut().map(f)
    }
}
