//! Application Context
//!
//! Shared state and the synchronizer, provided via Leptos Context API.
//! Components call the action methods here; each one spawns the matching
//! synchronizer operation. Failures are logged and surfaced as the
//! state's notice by the synchronizer itself.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_sync::{HttpItemStore, Item, Synchronizer, TodoState};

use crate::store::SignalCell;

pub type TodoSync = Synchronizer<HttpItemStore, SignalCell>;

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Local list and interaction state
    pub todos: RwSignal<TodoState>,
    sync: StoredValue<TodoSync, LocalStorage>,
}

impl AppContext {
    pub fn new(todos: RwSignal<TodoState>, sync: TodoSync) -> Self {
        Self {
            todos,
            sync: StoredValue::new_local(sync),
        }
    }

    /// The synchronizer, unless the app has been torn down
    fn sync(&self) -> Option<TodoSync> {
        self.sync.try_get_value()
    }

    fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(TodoSync) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(sync) = self.sync() {
            spawn_local(action(sync));
        }
    }

    // ========================
    // Store Operations
    // ========================

    /// Reload the full list from the store
    pub fn load(&self) {
        self.spawn(|sync| async move {
            sync.load().await;
        });
    }

    /// Create an item from the new-item draft
    pub fn submit_draft(&self) {
        self.spawn(|sync| async move {
            let _ = sync.submit_draft().await;
        });
    }

    pub fn toggle(&self, id: u32) {
        self.spawn(move |sync| async move {
            let _ = sync.toggle(id).await;
        });
    }

    pub fn delete(&self, id: u32) {
        self.spawn(move |sync| async move {
            let _ = sync.delete(id).await;
        });
    }

    pub fn save_edit(&self) {
        self.spawn(|sync| async move {
            let _ = sync.save_edit().await;
        });
    }

    // ========================
    // Local Interaction
    // ========================

    pub fn begin_edit(&self, item: &Item) {
        if let Some(sync) = self.sync() {
            sync.begin_edit(item);
        }
    }

    pub fn cancel_edit(&self) {
        if let Some(sync) = self.sync() {
            sync.cancel_edit();
        }
    }

    pub fn set_draft(&self, text: String) {
        if let Some(sync) = self.sync() {
            sync.set_draft(text);
        }
    }

    pub fn set_edit_draft(&self, text: String) {
        if let Some(sync) = self.sync() {
            sync.set_edit_draft(text);
        }
    }

    pub fn dismiss_notice(&self) {
        if let Some(sync) = self.sync() {
            sync.dismiss_notice();
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
