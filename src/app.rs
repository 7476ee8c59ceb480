//! Todo Frontend App
//!
//! Main application component: heading, failure notice, new item form,
//! the list and a count footer.

use leptos::prelude::*;

use todo_sync::{HttpItemStore, Synchronizer, TodoState};

use crate::config;
use crate::context::AppContext;
use crate::store::SignalCell;
use crate::components::{NewTodoForm, NoticeBanner, TodoList};

#[component]
pub fn App() -> impl IntoView {
    // State
    let todos = RwSignal::new(TodoState::new());
    let sync = Synchronizer::new(HttpItemStore::new(config::store_config()), SignalCell(todos));
    let lifecycle = sync.lifecycle();

    // Provide context to all children
    let ctx = AppContext::new(todos, sync);
    provide_context(ctx);

    // Load items on mount
    Effect::new(move |_| {
        log::debug!("[APP] Mounted, loading items");
        ctx.load();
    });

    // Abort in-flight requests when the view goes away
    on_cleanup(move || lifecycle.dispose());

    let count = move || {
        todos.with(|t| format!("{} items, {} done", t.items().len(), t.completed_count()))
    };

    view! {
        <main class="main-content">
            <h1>"Todos"</h1>

            <NoticeBanner />

            <NewTodoForm />

            <TodoList />

            <p class="item-count">{count}</p>
        </main>
    }
}
