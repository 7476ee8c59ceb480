//! Inline Edit Form
//!
//! Replaces the row of the item under edit. Enter saves, Escape cancels.

use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::prelude::*;
use todo_sync::Item;

use crate::context::use_app_context;

#[component]
pub fn EditForm(item: Item) -> impl IntoView {
    let ctx = use_app_context();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        ctx.save_edit();
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.cancel_edit();
        }
    };

    view! {
        <li class="item-row editing">
            <form class="edit-form" on:submit=on_submit>
                <input
                    type="text"
                    autofocus=true
                    placeholder=item.title
                    prop:value=move || ctx.todos.with(|t| t.edit_draft().to_string())
                    on:input=move |ev| ctx.set_edit_draft(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button type="submit">"Save"</button>
                <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>"Cancel"</button>
            </form>
        </li>
    }
}
