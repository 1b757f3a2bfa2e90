//! Top navigation bar with brand, home link, and session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::profile_picture::ProfilePicture;
use crate::net::api::Api;

/// Navigation bar shown on every page of the main layout.
///
/// Signed out: a login button. Signed in: the user's avatar linking to
/// their profile, plus a logout button.
#[component]
pub fn Navbar() -> impl IntoView {
    let api = expect_context::<Api>();
    let session = api.session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = api.logout().await {
                    leptos::logging::warn!("logout request failed: {err}");
                }
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate);
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">"HonkSpotter"</a>
            <div class="navbar__links">
                <a class="navbar__link" href="/">"Home"</a>
                {move || {
                    if session.with(|s| s.is_authenticated()) {
                        let user_id = session.with(|s| s.user_id()).unwrap_or_default();
                        let picture = session.with(|s| s.profile_picture_ref());
                        let fallback = session.with(|s| s.display_fallback()).unwrap_or_default();
                        let on_logout = on_logout.clone();
                        view! {
                            <div class="navbar__session">
                                <a class="navbar__avatar" href=format!("/user/{user_id}")>
                                    <ProfilePicture picture=picture fallback=fallback/>
                                </a>
                                <button class="btn navbar__logout" on:click=on_logout>
                                    "Logout"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <a class="btn btn--primary navbar__login" href="/login">
                                "Login"
                            </a>
                        }
                            .into_any()
                    }
                }}
            </div>
        </nav>
    }
}
