//! Login and signup pages.

use leptos::prelude::*;

use crate::components::auth_form::{AuthForm, AuthMode};

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <AuthForm mode=AuthMode::Login/>
        </div>
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <AuthForm mode=AuthMode::Signup/>
        </div>
    }
}
