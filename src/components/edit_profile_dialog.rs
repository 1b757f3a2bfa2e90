//! Modal dialog for editing the signed-in user's profile.

use leptos::prelude::*;

use crate::components::image_upload::ImageUpload;
use crate::net::api::Api;
use crate::net::types::{ProfileUpdate, User};
use crate::state::notices::{NoticeLevel, NoticeState};

/// Edit dialog pre-filled from the current profile record.
#[component]
pub fn EditProfileDialog(
    user: User,
    on_cancel: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let api = expect_context::<Api>();
    let notices = expect_context::<RwSignal<NoticeState>>();

    let username = RwSignal::new(user.username.clone().unwrap_or_default());
    let description = RwSignal::new(user.description.clone().unwrap_or_default());
    let picture_id = RwSignal::new(user.profile_picture.clone().unwrap_or_default());
    let busy = RwSignal::new(false);

    let save = move |_| {
        let update = ProfileUpdate {
            username: Some(username.get_untracked().trim().to_owned()),
            description: Some(description.get_untracked()),
            profile_picture: Some(picture_id.get_untracked()),
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                match api.update_profile(&update).await {
                    Ok(_) => {
                        notices.update(|n| {
                            n.push(NoticeLevel::Success, "Profile updated successfully!");
                        });
                        on_saved.run(());
                        on_cancel.run(());
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
            let _ = (&api, &update, &notices, &on_saved);
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Edit Profile"</h2>

                <label class="dialog__label">
                    "Username"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "About you"
                    <textarea
                        class="dialog__textarea"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <ImageUpload image_id=picture_id/>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=save>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
