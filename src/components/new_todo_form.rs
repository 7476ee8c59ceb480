//! New Todo Form Component
//!
//! Input and Add button for creating items.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for creating new items
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_app_context();

    let create_item = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.submit_draft();
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Add new item..."
                    prop:value=move || ctx.todos.with(|t| t.draft().to_string())
                    on:input=move |ev| ctx.set_draft(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}
