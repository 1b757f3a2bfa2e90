//! REST gateway for the sightings server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Every
//! authenticated request goes through a retry loop: on a 401 the gateway
//! refreshes the access token (one shared in-flight refresh, no matter how
//! many requests hit 401 together) and replays the request once with the
//! new token.
//!
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

use super::error::ApiError;
use super::types::{Credentials, ProfileUpdate, Sighting, SightingDraft, User};
use crate::state::notices::NoticeState;
use crate::state::session::SessionState;

#[cfg(feature = "hydrate")]
use super::types::{
    ApiEndpoint, AuthResponse, ImageUploadResponse, RefreshRequest, SightingEnvelope,
    SightingsEnvelope, UserEnvelope,
};

/// Cookie the server leaves readable so the client can echo it back on
/// refresh. The refresh token itself stays HTTP-only.
pub const CSRF_REFRESH_COOKIE: &str = "csrf_refresh_token";

/// Header the refresh endpoint checks against the cookie above.
pub const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// Shown once when a refresh fails and the session is dropped.
pub const SESSION_EXPIRED_NOTICE: &str = "Session expired, please log in again";

/// Which try of a request this is. A request is replayed at most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attempt {
    First,
    Retried,
}

/// What the gateway does with a response, given which attempt produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Hand the response to the caller as-is.
    Pass,
    /// Refresh the access token, then replay the request.
    RefreshAndRetry,
    /// The replayed request still came back 401; the session is dead.
    Terminal,
}

/// Pure recovery decision for the retry loop. Only a 401 on the first
/// attempt triggers a refresh; everything else passes through.
#[must_use]
pub fn next_action(status: u16, attempt: Attempt) -> RecoveryAction {
    match (status, attempt) {
        (401, Attempt::First) => RecoveryAction::RefreshAndRetry,
        (401, Attempt::Retried) => RecoveryAction::Terminal,
        _ => RecoveryAction::Pass,
    }
}

/// `Authorization` header value for an access token.
#[must_use]
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
type SharedRefresh =
    futures::future::Shared<futures::future::LocalBoxFuture<'static, Result<String, ApiError>>>;

// One in-flight refresh for the whole app; the browser is single-threaded
// and every `Api` clone must coalesce onto the same attempt.
#[cfg(feature = "hydrate")]
thread_local! {
    static REFRESH_INFLIGHT: RefCell<Option<SharedRefresh>> = const { RefCell::new(None) };
}

/// Handle to the server shared through context. Cheap to clone; all clones
/// observe the same session and share one in-flight refresh.
#[derive(Clone)]
pub struct Api {
    session: RwSignal<SessionState>,
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    notices: RwSignal<NoticeState>,
}

impl Api {
    #[must_use]
    pub fn new(session: RwSignal<SessionState>, notices: RwSignal<NoticeState>) -> Self {
        Self { session, notices }
    }

    #[must_use]
    pub fn session(&self) -> RwSignal<SessionState> {
        self.session
    }

    /// Exchange the refresh cookie for a new access token and install it.
    ///
    /// Concurrent callers are coalesced onto one network attempt and all
    /// see its outcome. On failure the session is dropped.
    ///
    /// # Errors
    ///
    /// `ApiError::SessionExpired` when the server refuses the refresh,
    /// `ApiError::Network` when it cannot be reached.
    pub async fn refresh_access_token(&self) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let shared = REFRESH_INFLIGHT.with(|cell| {
                let mut slot = cell.borrow_mut();
                if let Some(inflight) = slot.as_ref() {
                    inflight.clone()
                } else {
                    let api = self.clone();
                    let fut: futures::future::LocalBoxFuture<'static, Result<String, ApiError>> =
                        Box::pin(async move { api.refresh_once().await });
                    let shared = futures::FutureExt::shared(fut);
                    *slot = Some(shared.clone());
                    shared
                }
            });
            let outcome = shared.await;
            REFRESH_INFLIGHT.with(|cell| cell.borrow_mut().take());
            match outcome {
                Ok(token) => Ok(token),
                Err(err) => {
                    self.expire_session();
                    Err(ApiError::SessionExpired(err.to_string()))
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Log in and install the returned access token.
    ///
    /// # Errors
    ///
    /// The server's rejection reaches the caller as an error with a
    /// user-displayable message.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .send_json(
                    Method::Post,
                    &ApiEndpoint::Login.url(),
                    Some(&to_json(credentials)?),
                )
                .await?;
            let auth: AuthResponse = Self::json_body(&resp).await?;
            self.session
                .update(|s| s.set_access_token(Some(auth.access_token)));
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    /// Create an account; the server logs the new user straight in.
    ///
    /// # Errors
    ///
    /// The server's rejection (duplicate email, weak password) reaches the
    /// caller as an error with a user-displayable message.
    pub async fn signup(&self, credentials: &Credentials) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .send_json(
                    Method::Post,
                    &ApiEndpoint::Signup.url(),
                    Some(&to_json(credentials)?),
                )
                .await?;
            let auth: AuthResponse = Self::json_body(&resp).await?;
            self.session
                .update(|s| s.set_access_token(Some(auth.access_token)));
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    /// Log out server-side (revokes the refresh cookie) and drop the local
    /// session whether or not the server call succeeded.
    ///
    /// # Errors
    ///
    /// Returns the server error for logging; the local session is already
    /// cleared by then.
    pub async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let outcome = self
                .send_json(Method::Post, &ApiEndpoint::Logout.url(), None)
                .await;
            self.session.update(SessionState::clear_access_token);
            outcome.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch sightings, optionally only one user's. Public endpoint, but
    /// still goes through the gateway so a stale token refreshes in the
    /// background.
    ///
    /// # Errors
    ///
    /// Network, server, or decode failure.
    pub async fn fetch_sightings(&self, user_id: Option<&str>) -> Result<Vec<Sighting>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = match user_id {
                Some(id) => format!("{}?user_id={id}", ApiEndpoint::Sightings.url()),
                None => ApiEndpoint::Sightings.url(),
            };
            let resp = self.send_json(Method::Get, &url, None).await?;
            let body: SightingsEnvelope = Self::json_body(&resp).await?;
            Ok(body.sightings)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            Err(ApiError::Unavailable)
        }
    }

    /// Report a new sighting; returns the stored record.
    ///
    /// # Errors
    ///
    /// Network, server, or decode failure.
    pub async fn submit_sighting(&self, draft: &SightingDraft) -> Result<Sighting, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .send_json(
                    Method::Post,
                    &ApiEndpoint::SubmitSighting.url(),
                    Some(&to_json(draft)?),
                )
                .await?;
            let body: SightingEnvelope = Self::json_body(&resp).await?;
            Ok(body.sighting)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
            Err(ApiError::Unavailable)
        }
    }

    /// Update the signed-in user's profile; returns the updated record.
    ///
    /// # Errors
    ///
    /// Network, server, or decode failure.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .send_json(
                    Method::Post,
                    &ApiEndpoint::UpdateProfile.url(),
                    Some(&to_json(update)?),
                )
                .await?;
            let body: UserEnvelope = Self::json_body(&resp).await?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch a user's public profile.
    ///
    /// # Errors
    ///
    /// `is_not_found` on the error distinguishes an unknown id.
    pub async fn fetch_user(&self, user_id: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .send_json(Method::Get, &super::types::user_url(user_id), None)
                .await?;
            let body: UserEnvelope = Self::json_body(&resp).await?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
            Err(ApiError::Unavailable)
        }
    }

    /// Delete an uploaded image by id.
    ///
    /// # Errors
    ///
    /// Network or server failure.
    pub async fn delete_image(&self, image_id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send_json(Method::Delete, &super::types::image_delete_url(image_id), None)
                .await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = image_id;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch an image and hand back an object URL an `<img>` can display.
    /// Returns `None` on any failure or on the server; missing images just
    /// render as their fallback.
    pub async fn fetch_image_object_url(&self, image_id: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self
                .send_json(Method::Get, &super::types::image_url(image_id), None)
                .await
                .ok()?;
            let bytes = resp.binary().await.ok()?;
            object_url_from_bytes(&bytes)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = image_id;
            None
        }
    }

    /// Upload an image from a file input; returns the server-assigned id.
    ///
    /// # Errors
    ///
    /// Network, server, or decode failure.
    #[cfg(feature = "hydrate")]
    pub async fn upload_image(&self, file: &web_sys::File) -> Result<String, ApiError> {
        let form = web_sys::FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(js_error)?;
        let resp = self
            .send_with(|token| {
                let mut builder = gloo_net::http::Request::post(&ApiEndpoint::ImageUpload.url());
                if let Some(token) = token {
                    builder = builder.header("Authorization", &bearer_value(token));
                }
                builder
                    .body(form.clone())
                    .map_err(|e| ApiError::Network(e.to_string()))
            })
            .await?;
        let body: ImageUploadResponse = Self::json_body(&resp).await?;
        Ok(body.id)
    }

    /// One network attempt against the refresh endpoint. The readable CSRF
    /// cookie is echoed in a header; the refresh token rides along as the
    /// HTTP-only cookie the browser attaches.
    #[cfg(feature = "hydrate")]
    async fn refresh_once(&self) -> Result<String, ApiError> {
        let mut builder = gloo_net::http::Request::post(&ApiEndpoint::Refresh.url())
            .credentials(web_sys::RequestCredentials::Include);
        if let Some(csrf) = crate::util::cookie::read(CSRF_REFRESH_COOKIE) {
            builder = builder.header(CSRF_HEADER, &csrf);
        }
        let body = RefreshRequest {
            access_token: self
                .session
                .with_untracked(|s| s.access_token().map(str::to_owned)),
        };
        let resp = builder
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(Self::status_error(&resp).await);
        }
        let auth: AuthResponse = Self::json_body(&resp).await?;
        self.session
            .update(|s| s.set_access_token(Some(auth.access_token.clone())));
        Ok(auth.access_token)
    }

    /// Drop the session and tell the user, once. A no-op when already
    /// signed out, so a cold-start refresh failure stays silent.
    #[cfg(feature = "hydrate")]
    fn expire_session(&self) {
        if self.session.with_untracked(SessionState::is_authenticated) {
            self.session.update(SessionState::clear_access_token);
            self.notices.update(|n| {
                n.push_unique(
                    crate::state::notices::NoticeLevel::Error,
                    SESSION_EXPIRED_NOTICE,
                );
            });
        }
    }

    /// The retry loop. `build` is called per attempt with the token as it
    /// stands at that moment, so the replay picks up the refreshed one.
    ///
    /// A failed refresh surfaces `SessionExpired`, not the original 401,
    /// so callers can tell "your request failed" from "your session is
    /// gone". A 401 on the replay is surfaced as-is.
    #[cfg(feature = "hydrate")]
    async fn send_with<F>(&self, build: F) -> Result<gloo_net::http::Response, ApiError>
    where
        F: Fn(Option<&str>) -> Result<gloo_net::http::Request, ApiError>,
    {
        let mut attempt = Attempt::First;
        loop {
            let token = self
                .session
                .with_untracked(|s| s.access_token().map(str::to_owned));
            let resp = build(token.as_deref())?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            match next_action(resp.status(), attempt) {
                RecoveryAction::Pass => {
                    if resp.ok() {
                        return Ok(resp);
                    }
                    return Err(Self::status_error(&resp).await);
                }
                RecoveryAction::RefreshAndRetry => {
                    self.refresh_access_token().await?;
                    attempt = Attempt::Retried;
                }
                RecoveryAction::Terminal => {
                    self.expire_session();
                    return Err(Self::status_error(&resp).await);
                }
            }
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send_json(
        &self,
        method: Method,
        url: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<gloo_net::http::Response, ApiError> {
        self.send_with(|token| {
            let mut builder = match method {
                Method::Get => gloo_net::http::Request::get(url),
                Method::Post => gloo_net::http::Request::post(url),
                Method::Delete => gloo_net::http::Request::delete(url),
            };
            if let Some(token) = token {
                builder = builder.header("Authorization", &bearer_value(token));
            }
            match body {
                Some(json) => builder.json(json).map_err(|e| ApiError::Network(e.to_string())),
                None => builder.build().map_err(|e| ApiError::Network(e.to_string())),
            }
        })
        .await
    }

    #[cfg(feature = "hydrate")]
    async fn status_error(resp: &gloo_net::http::Response) -> ApiError {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        ApiError::Status {
            status,
            message: super::error::server_message(status, &body),
        }
    }

    #[cfg(feature = "hydrate")]
    async fn json_body<T: serde::de::DeserializeOwned>(
        resp: &gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
    Delete,
}

#[cfg(feature = "hydrate")]
fn to_json<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
fn object_url_from_bytes(bytes: &[u8]) -> Option<String> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts).ok()?;
    web_sys::Url::create_object_url_with_blob(&blob).ok()
}
