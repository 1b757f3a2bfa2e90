//! User profile card with optional self-service editing.

use leptos::prelude::*;

use crate::components::edit_profile_dialog::EditProfileDialog;
use crate::components::profile_picture::ProfilePicture;
use crate::net::api::Api;
use crate::net::types::User;

/// Card showing a user's public profile.
///
/// The edit button only appears when the viewer is looking at their own
/// profile; `on_saved` fires after a successful save so the page can
/// refetch the record.
#[component]
pub fn ProfileCard(user: User, on_saved: Callback<()>) -> impl IntoView {
    let api = expect_context::<Api>();
    let session = api.session();
    let show_edit = RwSignal::new(false);

    let display_name = user
        .username
        .clone()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| "Anonymous User".to_owned());
    let fallback = display_name
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default();

    let own_id = user.id.clone();
    let is_own_profile =
        move || session.with(|s| s.user_id().as_deref() == Some(own_id.as_str()));

    let edit_user = user.clone();
    let on_cancel = Callback::new(move |()| show_edit.set(false));

    view! {
        <div class="profile-card">
            <div class="profile-card__header">
                <ProfilePicture picture=user.profile_picture.clone() fallback=fallback/>
                <h2 class="profile-card__name">{display_name}</h2>
                {user
                    .is_banned
                    .then(|| view! { <span class="profile-card__banned">"Banned"</span> })}
            </div>

            <div class="profile-card__about">
                <h3 class="profile-card__about-heading">"About"</h3>
                <p class="profile-card__description">
                    {user
                        .description
                        .clone()
                        .filter(|d| !d.trim().is_empty())
                        .unwrap_or_else(|| "This user hasn't written anything yet.".to_owned())}
                </p>
            </div>

            <Show when=is_own_profile>
                <button class="btn profile-card__edit" on:click=move |_| show_edit.set(true)>
                    "Edit Profile"
                </button>
            </Show>

            {move || {
                show_edit
                    .get()
                    .then(|| {
                        let user = edit_user.clone();
                        view! {
                            <EditProfileDialog user=user on_cancel=on_cancel on_saved=on_saved/>
                        }
                    })
            }}
        </div>
    }
}
