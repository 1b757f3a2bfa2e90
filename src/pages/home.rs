//! Main layout: sighting pane beside the map.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::map_panel::MapPanel;
use crate::components::navbar::Navbar;
use crate::net::api::Api;
use crate::state::sightings::SightingsState;

/// Two-pane layout under the navbar. The left pane is the nested route
/// (list, detail, or report form); the right pane is always the map.
///
/// Sightings load once when the layout mounts and land in the shared
/// store so the map and every nested pane read the same data.
#[component]
pub fn HomePage() -> impl IntoView {
    let api = expect_context::<Api>();
    let sightings = expect_context::<RwSignal<SightingsState>>();
    let location = use_location();
    let navigate = use_navigate();

    let fetched = LocalResource::new(move || {
        let api = api.clone();
        async move { api.fetch_sightings(None).await }
    });

    Effect::new(move || {
        if let Some(result) = fetched.get() {
            match result {
                Ok(list) => sightings.update(|s| s.set_sightings(list)),
                Err(err) => leptos::logging::warn!("failed to load sightings: {err}"),
            }
        }
    });

    let reporting = move || location.pathname.get() == "/report";

    view! {
        <div class="home-page">
            <Navbar/>
            <div class="home-page__layout">
                <div class="home-page__pane">
                    <Outlet/>
                    {move || {
                        if reporting() {
                            view! {
                                <p class="home-page__hint">
                                    "Click the map to choose a location"
                                </p>
                            }
                                .into_any()
                        } else {
                            let navigate = navigate.clone();
                            view! {
                                <button
                                    class="btn btn--primary home-page__fab"
                                    on:click=move |_| {
                                        navigate("/report", NavigateOptions::default());
                                    }
                                >
                                    "Report a Goose!"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </div>
                <div class="home-page__map">
                    <MapPanel/>
                </div>
            </div>
        </div>
    }
}

/// Lands `/` on the sighting list.
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        navigate("/sightings", NavigateOptions::default());
    });
}
