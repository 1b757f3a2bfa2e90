//! Route guard wrapping pages that require a signed-in session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::Api;
use crate::state::notices::{NoticeLevel, NoticeState};

/// Shown when an unauthenticated visitor is bounced to the login page.
pub const LOGIN_REQUIRED_NOTICE: &str = "You must be logged in to access this page";

/// Gates children behind authentication.
///
/// A signed-in user may still have an empty in-memory token right after a
/// full page load, so before redirecting the guard tries one cookie
/// refresh. Only when that attempt has settled and there is still no
/// session does it push a notice and navigate to `/login`.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let api = expect_context::<Api>();
    let session = api.session();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let tried_refresh = RwSignal::new(false);

    // One silent refresh attempt on mount; nothing here is tracked.
    Effect::new(move || {
        if session.with_untracked(|s| s.is_authenticated()) {
            tried_refresh.set(true);
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let _ = api.refresh_access_token().await;
            tried_refresh.set(true);
        });
    });

    // Also fires if the session dies while the guarded page is open.
    Effect::new(move || {
        if tried_refresh.get() && !session.with(|s| s.is_authenticated()) {
            notices.update(|n| n.push_unique(NoticeLevel::Error, LOGIN_REQUIRED_NOTICE));
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show when=move || session.with(|s| s.is_authenticated())>
            {children()}
        </Show>
    }
}
