//! Avatar image with an initial-letter fallback.

use leptos::prelude::*;

use crate::net::api::Api;

/// Shows a user's uploaded picture, or their initial when they have none
/// or the image cannot be fetched.
#[component]
pub fn ProfilePicture(picture: Option<String>, fallback: String) -> impl IntoView {
    let api = expect_context::<Api>();

    // Image bytes need the bearer token, so they come through the gateway
    // as an object URL rather than a plain <img src>.
    let object_url = LocalResource::new(move || {
        let api = api.clone();
        let picture = picture.clone();
        async move {
            match picture {
                Some(image_id) => api.fetch_image_object_url(&image_id).await,
                None => None,
            }
        }
    });

    view! {
        <span class="profile-picture">
            {move || {
                match object_url.get().flatten() {
                    Some(url) => {
                        view! { <img class="profile-picture__img" src=url alt="Profile picture"/> }
                            .into_any()
                    }
                    None => {
                        view! { <span class="profile-picture__fallback">{fallback.clone()}</span> }
                            .into_any()
                    }
                }
            }}
        </span>
    }
}
