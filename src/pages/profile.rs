//! User profile page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::auth_guard::AuthGuard;
use crate::components::navbar::Navbar;
use crate::components::profile_card::ProfileCard;
use crate::net::api::Api;

/// Profile page for `/user/:id`; viewing any profile requires a session.
#[component]
pub fn UserProfilePage() -> impl IntoView {
    view! {
        <div class="profile-page">
            <Navbar/>
            <AuthGuard>
                <ProfileContent/>
            </AuthGuard>
        </div>
    }
}

#[component]
fn ProfileContent() -> impl IntoView {
    let api = expect_context::<Api>();
    let params = use_params_map();
    // Bumped after a profile save so the record refetches.
    let refresh_tick = RwSignal::new(0u32);

    let user_api = api.clone();
    let user = LocalResource::new(move || {
        let api = user_api.clone();
        let id = params.read().get("id").unwrap_or_default();
        refresh_tick.track();
        async move { api.fetch_user(&id).await }
    });

    let reports = LocalResource::new(move || {
        let api = api.clone();
        let id = params.read().get("id").unwrap_or_default();
        async move { api.fetch_sightings(Some(&id)).await }
    });

    let on_saved = Callback::new(move |()| refresh_tick.update(|t| *t += 1));

    view! {
        <div class="profile-content">
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    user.get()
                        .map(|result| match result {
                            Ok(record) => {
                                view! { <ProfileCard user=record on_saved=on_saved/> }.into_any()
                            }
                            Err(err) if err.is_not_found() => {
                                view! {
                                    <div class="profile-content__missing">
                                        <h2>"User Not Found"</h2>
                                        <p>"This goose watcher doesn't seem to exist."</p>
                                        <a class="btn" href="/">"Return to Home"</a>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <p class="profile-content__error">{err.to_string()}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <div class="profile-content__reports">
                <h3>"Reported sightings"</h3>
                {move || {
                    reports
                        .get()
                        .and_then(Result::ok)
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p>"No sightings reported yet."</p> }.into_any()
                            } else {
                                view! {
                                    <ul class="profile-content__report-list">
                                        {list
                                            .into_iter()
                                            .map(|sighting| {
                                                view! {
                                                    <li>
                                                        <a href=format!("/detail/{}", sighting.id)>
                                                            {sighting.name}
                                                        </a>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            }
                        })
                }}
            </div>
        </div>
    }
}
