//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::auth_guard::AuthGuard;
use crate::components::notice_stack::NoticeStack;
use crate::components::sighting_detail::SightingDetail;
use crate::components::sighting_list::SightingList;
use crate::components::sighting_report::SightingReport;
use crate::net::api::Api;
use crate::pages::auth::{LoginPage, SignupPage};
use crate::pages::home::{HomePage, HomeRedirect};
use crate::pages::profile::UserProfilePage;
use crate::state::coordinates::CoordinatesState;
use crate::state::notices::NoticeState;
use crate::state::session::SessionState;
use crate::state::sightings::SightingsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let sightings = RwSignal::new(SightingsState::default());
    let coordinates = RwSignal::new(CoordinatesState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(session);
    provide_context(sightings);
    provide_context(coordinates);
    provide_context(notices);

    let api = Api::new(session, notices);
    provide_context(api.clone());

    // Silent session restore on startup: the refresh cookie can outlive
    // the in-memory access token.
    Effect::new(move || {
        if session.with_untracked(|s| s.is_authenticated()) {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = api.refresh_access_token().await {
                leptos::logging::log!("no session to restore: {err}");
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/honkspotter.css"/>
        <Title text="HonkSpotter"/>

        <NoticeStack/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=(StaticSegment("user"), ParamSegment("id")) view=UserProfilePage/>
                <ParentRoute path=StaticSegment("") view=HomePage>
                    <Route path=StaticSegment("") view=HomeRedirect/>
                    <Route path=StaticSegment("sightings") view=SightingList/>
                    <Route path=(StaticSegment("detail"), ParamSegment("id")) view=SightingDetail/>
                    <Route path=StaticSegment("report") view=ReportRoute/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Report form behind the login guard.
#[component]
fn ReportRoute() -> impl IntoView {
    view! {
        <AuthGuard>
            <SightingReport/>
        </AuthGuard>
    }
}
