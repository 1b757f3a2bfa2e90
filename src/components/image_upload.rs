//! File input that uploads an image and reports the stored id.

use leptos::prelude::*;

use crate::net::api::Api;
use crate::state::notices::{NoticeLevel, NoticeState};

/// Image picker with upload, preview, and remove.
///
/// `image_id` holds the server-assigned id of the uploaded image, or the
/// empty string when there is none; the owning form reads it on submit.
#[component]
pub fn ImageUpload(image_id: RwSignal<String>) -> impl IntoView {
    let api = expect_context::<Api>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let busy = RwSignal::new(false);

    let upload_api = api.clone();
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let input = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
            let Some(file) = input.and_then(|i| i.files()).and_then(|files| files.get(0))
            else {
                return;
            };
            busy.set(true);
            let api = upload_api.clone();
            leptos::task::spawn_local(async move {
                match api.upload_image(&file).await {
                    Ok(id) => image_id.set(id),
                    Err(err) => notices.update(|n| {
                        n.push(NoticeLevel::Error, format!("Image upload failed: {err}"));
                    }),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ev, &upload_api, &notices);
        }
    };

    let remove_api = api.clone();
    let on_remove = move |_| {
        let id = image_id.get_untracked();
        if id.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let api = remove_api.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = api.delete_image(&id).await {
                    leptos::logging::warn!("image delete failed: {err}");
                }
                image_id.set(String::new());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&id, &remove_api);
        }
    };

    let preview_api = api.clone();
    let preview_url = LocalResource::new(move || {
        let api = preview_api.clone();
        let id = image_id.get();
        async move {
            if id.is_empty() {
                None
            } else {
                api.fetch_image_object_url(&id).await
            }
        }
    });

    view! {
        <div class="image-upload">
            <label class="image-upload__label">
                "Photo"
                <input
                    class="image-upload__input"
                    type="file"
                    accept="image/*"
                    disabled=move || busy.get()
                    on:change=on_change
                />
            </label>
            {move || {
                let on_remove = on_remove.clone();
                preview_url
                    .get()
                    .flatten()
                    .map(|url| {
                        view! {
                            <div class="image-upload__preview">
                                <img class="image-upload__img" src=url alt="Upload preview"/>
                                <button
                                    class="btn image-upload__remove"
                                    type="button"
                                    on:click=on_remove
                                >
                                    "Remove"
                                </button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
