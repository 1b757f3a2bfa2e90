//! Schematic map pane plotting sightings as positioned markers.
//!
//! The viewport is fitted around the plotted coordinates and markers are
//! absolutely positioned by percentage, so the pane needs no tile service
//! and renders the same on any screen size.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::coordinates::CoordinatesState;
use crate::state::sightings::SightingsState;
use crate::util::geo::{self, Coordinate};

/// Map pane for the main layout.
///
/// Clicking a marker selects that sighting and opens its detail view.
/// While the report page has armed pick mode, clicking empty map space
/// stores the clicked coordinate instead.
#[component]
pub fn MapPanel() -> impl IntoView {
    let sightings = expect_context::<RwSignal<SightingsState>>();
    let coordinates = expect_context::<RwSignal<CoordinatesState>>();
    let navigate = use_navigate();

    let viewport = Memo::new(move |_| {
        sightings.with(|state| {
            let coords: Vec<Coordinate> = state
                .sightings
                .iter()
                .filter_map(crate::net::types::Sighting::coordinate)
                .collect();
            geo::viewport_for(&coords)
        })
    });

    let on_map_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            if !coordinates.with_untracked(|c| c.map_should_pick) {
                return;
            }
            let Some(target) = ev.current_target() else {
                return;
            };
            let Ok(element) = target.dyn_into::<web_sys::HtmlElement>() else {
                return;
            };
            let width = f64::from(element.offset_width());
            let height = f64::from(element.offset_height());
            if width <= 0.0 || height <= 0.0 {
                return;
            }
            let x_pct = f64::from(ev.offset_x()) / width * 100.0;
            let y_pct = f64::from(ev.offset_y()) / height * 100.0;
            let picked = geo::unproject(x_pct, y_pct, &viewport.get_untracked());
            coordinates.update(|c| c.picked = Some(picked));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &ev;
        }
    };

    view! {
        <div
            class=move || {
                if coordinates.get().map_should_pick {
                    "map-panel map-panel--picking"
                } else {
                    "map-panel"
                }
            }
            on:click=on_map_click
        >
            {move || {
                let view_box = viewport.get();
                sightings.with(|state| {
                    state
                        .sightings
                        .iter()
                        .filter_map(|sighting| {
                            let coord = sighting.coordinate()?;
                            let (x, y) = geo::project(coord, &view_box);
                            let id = sighting.id.clone();
                            let selected = state.selected_id.as_deref() == Some(id.as_str());
                            let navigate = navigate.clone();
                            Some(view! {
                                <button
                                    class=if selected {
                                        "map-panel__marker map-panel__marker--selected"
                                    } else {
                                        "map-panel__marker"
                                    }
                                    style=format!("left: {x:.2}%; top: {y:.2}%;")
                                    title=sighting.name.clone()
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        ev.stop_propagation();
                                        sightings.update(|s| s.select(Some(id.clone())));
                                        navigate(
                                            &format!("/detail/{id}"),
                                            NavigateOptions::default(),
                                        );
                                    }
                                >
                                    "\u{1fabf}"
                                </button>
                            })
                        })
                        .collect::<Vec<_>>()
                })
            }}
            {move || {
                coordinates
                    .get()
                    .picked
                    .map(|coord| {
                        let (x, y) = geo::project(coord, &viewport.get());
                        view! {
                            <span
                                class="map-panel__marker map-panel__marker--picked"
                                style=format!("left: {x:.2}%; top: {y:.2}%;")
                            >
                                "\u{1f4cd}"
                            </span>
                        }
                    })
            }}
        </div>
    }
}
