//! Report form for a new goose sighting.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::image_upload::ImageUpload;
use crate::net::api::Api;
use crate::net::types::SightingDraft;
use crate::state::coordinates::CoordinatesState;
use crate::state::notices::{NoticeLevel, NoticeState};
use crate::state::sightings::SightingsState;
use crate::util::geo;

/// Report pane shown in the list column.
///
/// While mounted it arms pick mode on the map; the clicked coordinate
/// fills the read-only location fields. Submitting posts the draft and
/// drops the new sighting straight into the shared list.
#[component]
pub fn SightingReport() -> impl IntoView {
    let api = expect_context::<Api>();
    let sightings = expect_context::<RwSignal<SightingsState>>();
    let coordinates = expect_context::<RwSignal<CoordinatesState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let image_id = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        coordinates.update(|c| c.map_should_pick = true);
    });
    on_cleanup(move || {
        coordinates.update(|c| {
            c.map_should_pick = false;
            c.picked = None;
        });
    });

    let cancel_navigate = navigate.clone();
    let on_cancel = move |_| {
        cancel_navigate("/", NavigateOptions::default());
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(picked) = coordinates.with_untracked(|c| c.picked) else {
            notices.update(|n| {
                n.push(NoticeLevel::Warning, "Click the map to choose a location first");
            });
            return;
        };
        if name.get_untracked().trim().is_empty() {
            notices.update(|n| n.push(NoticeLevel::Warning, "Give the sighting a name"));
            return;
        }

        let draft = SightingDraft {
            name: name.get_untracked().trim().to_owned(),
            notes: notes.get_untracked(),
            coords: geo::format_coords(picked),
            image: image_id.get_untracked(),
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.submit_sighting(&draft).await {
                    Ok(sighting) => {
                        sightings.update(|s| s.add_sighting(sighting));
                        coordinates.update(|c| c.picked = None);
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => {
                        notices.update(|n| n.push(NoticeLevel::Error, err.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate, &draft, &sightings);
            busy.set(false);
        }
    };

    view! {
        <form class="sighting-report" on:submit=submit>
            <h2 class="sighting-report__heading">"Report Goose Sighting"</h2>

            <div class="sighting-report__coords">
                <label class="sighting-report__label">
                    "Latitude"
                    <input
                        class="sighting-report__input"
                        type="text"
                        readonly=true
                        placeholder="Click the map"
                        prop:value=move || {
                            coordinates
                                .get()
                                .picked
                                .map(|c| format!("{:.5}", c.lat))
                                .unwrap_or_default()
                        }
                    />
                </label>
                <label class="sighting-report__label">
                    "Longitude"
                    <input
                        class="sighting-report__input"
                        type="text"
                        readonly=true
                        placeholder="Click the map"
                        prop:value=move || {
                            coordinates
                                .get()
                                .picked
                                .map(|c| format!("{:.5}", c.lng))
                                .unwrap_or_default()
                        }
                    />
                </label>
            </div>

            <label class="sighting-report__label">
                "Name"
                <input
                    class="sighting-report__input"
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>

            <label class="sighting-report__label">
                "Notes"
                <textarea
                    class="sighting-report__textarea"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                ></textarea>
            </label>

            <ImageUpload image_id=image_id/>

            <div class="sighting-report__actions">
                <button class="btn" type="button" on:click=on_cancel>
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Submit"
                </button>
            </div>
        </form>
    }
}
