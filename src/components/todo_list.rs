//! Todo List Component
//!
//! Renders every item in local order; the row under edit becomes an
//! inline form.

use leptos::prelude::*;
use todo_sync::Item;

use crate::components::{EditForm, TodoRow};
use crate::context::use_app_context;

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_app_context();

    let rows = move || {
        ctx.todos.with(|t| {
            t.items()
                .iter()
                .map(|item| (item.clone(), t.is_editing(item.id)))
                .collect::<Vec<(Item, bool)>>()
        })
    };
    let is_empty = move || ctx.todos.with(|t| t.items().is_empty());

    view! {
        <ul class="item-list">
            <For
                each=rows
                // Every displayed field is part of the key so changes re-render the row
                key=|(item, editing)| (item.id, item.title.clone(), item.completed, *editing)
                children=move |(item, editing)| {
                    if editing {
                        view! { <EditForm item=item /> }.into_any()
                    } else {
                        view! { <TodoRow item=item /> }.into_any()
                    }
                }
            />
        </ul>
        <Show when=is_empty>
            <p class="empty-list">"Nothing to do"</p>
        </Show>
    }
}
