//! Notice Banner Component
//!
//! Shows the last failed store call. Dismissed by click or after a timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

const NOTICE_TIMEOUT_MS: u32 = 5_000;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();
    let notice = Memo::new(move |_| ctx.todos.with(|t| t.notice().map(str::to_string)));

    // Auto-dismiss, unless a newer notice replaced this one meanwhile
    Effect::new(move |_| {
        if let Some(message) = notice.get() {
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                if notice.try_get_untracked().flatten().as_deref() == Some(message.as_str()) {
                    ctx.dismiss_notice();
                }
            });
        }
    });

    move || {
        notice.get().map(|message| {
            view! {
                <div class="notice" role="alert">
                    <span class="notice-text">{message}</span>
                    <button class="dismiss-btn" on:click=move |_| ctx.dismiss_notice()>"×"</button>
                </div>
            }
        })
    }
}
