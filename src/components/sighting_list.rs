//! List pane showing every reported sighting.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::sightings::SightingsState;

/// Scrollable sighting list; clicking an entry opens its detail view and
/// highlights its marker on the map.
#[component]
pub fn SightingList() -> impl IntoView {
    let sightings = expect_context::<RwSignal<SightingsState>>();
    let navigate = use_navigate();

    view! {
        <div class="sighting-list">
            <h2 class="sighting-list__heading">
                {move || format!("{} Reported Sightings", sightings.with(|s| s.sightings.len()))}
            </h2>
            <ul class="sighting-list__items">
                {move || {
                    sightings.with(|state| {
                        state
                            .sightings
                            .iter()
                            .map(|sighting| {
                                let id = sighting.id.clone();
                                let selected = state.selected_id.as_deref() == Some(id.as_str());
                                let navigate = navigate.clone();
                                view! {
                                    <li
                                        class=if selected {
                                            "sighting-list__item sighting-list__item--selected"
                                        } else {
                                            "sighting-list__item"
                                        }
                                        on:click=move |_| {
                                            sightings.update(|s| s.select(Some(id.clone())));
                                            navigate(
                                                &format!("/detail/{id}"),
                                                NavigateOptions::default(),
                                            );
                                        }
                                    >
                                        <span class="sighting-list__name">{sighting.name.clone()}</span>
                                        <span class="sighting-list__date">
                                            {sighting.created_date.clone().unwrap_or_default()}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </ul>
        </div>
    }
}
