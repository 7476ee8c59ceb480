//! Todo Row Component
//!
//! Read-only row for one item.

use leptos::prelude::*;
use todo_sync::Item;

use crate::context::use_app_context;

/// A single item row
#[component]
pub fn TodoRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let id = item.id;
    let completed = item.completed;
    let text = item.title.clone();
    let edit_on_dblclick = item.clone();
    let edit_on_click = item;

    view! {
        <li class=if completed { "item-row completed" } else { "item-row" }>
            // Checkbox: the store decides the new value
            <input
                type="checkbox"
                prop:checked=completed
                on:change=move |_| ctx.toggle(id)
            />

            <span class="item-text" on:dblclick=move |_| ctx.begin_edit(&edit_on_dblclick)>
                {text}
            </span>

            <button class="edit-btn" on:click=move |_| ctx.begin_edit(&edit_on_click)>"Edit"</button>

            <button class="delete-btn" on:click=move |_| ctx.delete(id)>"×"</button>
        </li>
    }
}
