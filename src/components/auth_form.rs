//! Shared login/signup form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::Api;
use crate::net::types::Credentials;
use crate::util::validate;

/// Which face of the form is showing. Both hit the same validation and
/// land the user on the home page with a live session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome quack! \u{1fabf}",
            Self::Signup => "Goose to meet you! \u{1f9a2}",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign Up",
        }
    }

    fn switch_prompt(self) -> &'static str {
        match self {
            Self::Login => "Don't have an account?",
            Self::Signup => "Already have an account?",
        }
    }

    fn switch_href(self) -> &'static str {
        match self {
            Self::Login => "/signup",
            Self::Signup => "/login",
        }
    }

    fn switch_label(self) -> &'static str {
        match self {
            Self::Login => "Sign up",
            Self::Signup => "Log in",
        }
    }
}

/// Email/password form used by both the login and signup pages.
///
/// Field problems are caught locally; server rejections (bad credentials,
/// duplicate email, account lockout) show the server's own message.
#[component]
pub fn AuthForm(mode: AuthMode) -> impl IntoView {
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let server_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_problem = validate::email_problem(&email.get());
        // Signup enforces password strength; login only needs something
        // typed, the server is the judge of whether it matches.
        let password_problem = match mode {
            AuthMode::Signup => validate::password_problem(&password.get()),
            AuthMode::Login => {
                if password.get().is_empty() {
                    Some("Please enter your password")
                } else {
                    None
                }
            }
        };
        email_error.set(email_problem);
        password_error.set(password_problem);
        if email_problem.is_some() || password_problem.is_some() {
            return;
        }

        let credentials = Credentials {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        busy.set(true);
        server_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = match mode {
                    AuthMode::Login => api.login(&credentials).await,
                    AuthMode::Signup => api.signup(&credentials).await,
                };
                busy.set(false);
                match outcome {
                    Ok(()) => navigate("/", NavigateOptions::default()),
                    Err(err) => server_error.set(Some(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate, &credentials);
            busy.set(false);
        }
    };

    view! {
        <form class="auth-form" novalidate=true on:submit=submit>
            <h1 class="auth-form__title">{mode.title()}</h1>

            {move || {
                server_error
                    .get()
                    .map(|message| {
                        let class = if message.contains("Account locked until") {
                            "auth-form__server-error auth-form__server-error--locked"
                        } else {
                            "auth-form__server-error"
                        };
                        view! { <p class=class role="alert">{message}</p> }
                    })
            }}

            <label class="auth-form__label">
                "Email"
                <input
                    class="auth-form__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            {move || {
                email_error
                    .get()
                    .map(|problem| view! { <p class="auth-form__field-error">{problem}</p> })
            }}

            <label class="auth-form__label">
                "Password"
                <input
                    class="auth-form__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            {move || {
                password_error
                    .get()
                    .map(|problem| view! { <p class="auth-form__field-error">{problem}</p> })
            }}

            <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                {mode.submit_label()}
            </button>

            <p class="auth-form__switch">
                {mode.switch_prompt()} " " <a href=mode.switch_href()>{mode.switch_label()}</a>
            </p>
        </form>
    }
}
