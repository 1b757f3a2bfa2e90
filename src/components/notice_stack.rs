//! Floating stack of dismissible notices.

use leptos::prelude::*;

use crate::state::notices::{Notice, NoticeLevel, NoticeState};

/// Renders every live notice in a fixed corner stack.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-stack">
            {move || {
                notices
                    .get()
                    .notices
                    .into_iter()
                    .map(|notice| view! { <NoticeItem notice=notice/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn NoticeItem(notice: Notice) -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    let class = match notice.level {
        NoticeLevel::Error => "notice notice--error",
        NoticeLevel::Warning => "notice notice--warning",
        NoticeLevel::Success => "notice notice--success",
    };
    let id = notice.id.clone();

    view! {
        <div class=class role="alert">
            <span class="notice__message">{notice.message}</span>
            <button class="notice__dismiss" on:click=move |_| notices.update(|n| n.dismiss(&id))>
                "\u{d7}"
            </button>
        </div>
    }
}
