//! Detail pane for a single sighting, driven by the `:id` route param.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::api::Api;
use crate::state::sightings::SightingsState;

/// Shows one sighting's full record. The route param also drives the map
/// selection so the matching marker highlights while this pane is open.
#[component]
pub fn SightingDetail() -> impl IntoView {
    let api = expect_context::<Api>();
    let sightings = expect_context::<RwSignal<SightingsState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let sighting_id = move || params.read().get("id");

    // Keep the shared selection in step with the route.
    Effect::new(move || {
        let id = sighting_id();
        sightings.update(|s| s.select(id));
    });
    on_cleanup(move || {
        sightings.update(|s| s.select(None));
    });

    let image_id = Memo::new(move |_| {
        let id = sighting_id()?;
        sightings.with(|state| {
            state
                .sightings
                .iter()
                .find(|s| s.id == id)
                .and_then(|s| s.image.clone())
        })
    });

    let object_url = LocalResource::new(move || {
        let api = api.clone();
        let image = image_id.get();
        async move {
            match image {
                Some(id) => api.fetch_image_object_url(&id).await,
                None => None,
            }
        }
    });

    let on_back = move |_| {
        navigate("/sightings", NavigateOptions::default());
    };

    view! {
        <div class="sighting-detail">
            <button class="btn sighting-detail__back" on:click=on_back>
                "\u{2190} Back"
            </button>
            {move || {
                let id = sighting_id();
                sightings.with(|state| {
                    let found = id.and_then(|id| state.sightings.iter().find(|s| s.id == id));
                    match found {
                        Some(sighting) => {
                            let reporter = sighting.user_id.clone();
                            view! {
                                <div class="sighting-detail__card">
                                    <h2 class="sighting-detail__name">{sighting.name.clone()}</h2>
                                    <p class="sighting-detail__coords">{sighting.coords.clone()}</p>
                                    <p class="sighting-detail__notes">
                                        {sighting
                                            .notes
                                            .clone()
                                            .filter(|n| !n.trim().is_empty())
                                            .unwrap_or_else(|| "No notes for this sighting.".to_owned())}
                                    </p>
                                    {sighting
                                        .created_date
                                        .clone()
                                        .map(|date| {
                                            view! { <p class="sighting-detail__date">{date}</p> }
                                        })}
                                    {reporter
                                        .map(|uid| {
                                            view! {
                                                <a
                                                    class="sighting-detail__reporter"
                                                    href=format!("/user/{uid}")
                                                >
                                                    "View reporter's profile"
                                                </a>
                                            }
                                        })}
                                    {move || {
                                        object_url
                                            .get()
                                            .flatten()
                                            .map(|url| {
                                                view! {
                                                    <img
                                                        class="sighting-detail__photo"
                                                        src=url
                                                        alt="Sighting photo"
                                                    />
                                                }
                                            })
                                    }}
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <p class="sighting-detail__missing">"Cannot find sighting"</p>
                            }
                                .into_any()
                        }
                    }
                })
            }}
        </div>
    }
}
